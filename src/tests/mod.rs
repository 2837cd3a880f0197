#[cfg(test)]
mod formatting_tests {
    use std::rc::Rc;

    use crate::{
        render, CallableDescriptor, Field, Inspect, InspectError, Parameter, ResultSet, Structure,
        Value, Visibility, XmlElement,
    };

    struct Account {
        owner: String,
        balance: i64,
    }

    impl Inspect for Account {
        fn type_name(&self) -> &str {
            "Account"
        }

        fn fields(&self) -> Vec<Field> {
            vec![
                Field::public("owner", self.owner.clone()),
                Field::private("balance", self.balance),
            ]
        }

        fn methods(&self) -> Vec<CallableDescriptor> {
            vec![
                CallableDescriptor::new("deposit")
                    .param(Parameter::required("amount"))
                    .param(Parameter::optional("memo", Value::Null))
                    .with_doc("/**\n * Adds funds.\n * @param int $amount cents\n * @return bool\n */"),
                CallableDescriptor::new("open").with_static(true),
                CallableDescriptor::new("__toString").inherited(),
            ]
        }
    }

    fn account() -> Value {
        Value::object(Account {
            owner: "ada".to_string(),
            balance: 250,
        })
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_mapping_with_nested_sequence() {
        let value = Value::map([
            ("x", Value::from(1)),
            ("y", Value::list([Value::Bool(true), Value::Null])),
        ]);

        let expected = concat!(
            "<table class=\"debug associativeArray\"><thead><tr><th colspan=\"2\">Associative Array</th></tr></thead><tbody>",
            "<tr><td class=\"label\">x</td><td><div>1</div></td></tr>",
            "<tr><td class=\"label\">y</td><td>",
            "<table class=\"debug indexedArray\"><thead><tr><th colspan=\"2\">Indexed Array</th></tr></thead><tbody>",
            "<tr><td class=\"label\">0</td><td><div class=\"boolean\">TRUE</div></td></tr>",
            "<tr><td class=\"label\">1</td><td><div class=\"null\">NULL</div></td></tr>",
            "</tbody></table>",
            "</td></tr></tbody></table>"
        );
        assert_eq!(render(&value), expected);
    }

    #[test]
    fn test_rendering_pure_values_is_idempotent() {
        let value = Value::map([
            ("name", Value::from("widget")),
            ("sizes", Value::list([1.5, 2.0])),
            ("tags", Value::list(Vec::<Value>::new())),
            ("owner", account()),
        ]);
        assert_eq!(render(&value), render(&value));
    }

    #[test]
    fn test_mapping_keeps_insertion_order() {
        let html = render(&Value::map([("b", 1), ("a", 2), ("c", 3)]));
        let b = html.find(">b<").unwrap();
        let a = html.find(">a<").unwrap();
        let c = html.find(">c<").unwrap();
        assert!(b < a && a < c);
    }

    #[test]
    fn test_empty_container_title() {
        let empty = render(&Value::list(Vec::<Value>::new()));
        assert!(empty.contains("<th colspan=\"2\">Indexed Array [empty]</th>"));

        let filled = render(&Value::list([1]));
        assert!(filled.contains("<th colspan=\"2\">Indexed Array</th>"));
        assert!(!filled.contains("[empty]"));
    }

    #[test]
    fn test_empty_string_is_distinct() {
        let empty = render(&Value::from(""));
        let null = render(&Value::Null);
        let text = render(&Value::from("x"));

        assert!(empty.contains("[empty string]"));
        assert_ne!(empty, null);
        assert_ne!(empty, text);
        assert!(!text.contains("[empty string]"));
    }

    #[test]
    fn test_private_fields_are_rendered() {
        let html = render(&account());
        assert!(html.contains("<th colspan=\"2\">Object Account</th>"));
        assert!(html.contains(
            "<tr class=\"prop\" data-visibility=\"private\"><td class=\"label\">balance</td><td><div>250</div></td></tr>"
        ));
        assert!(html.contains(
            "<tr class=\"prop\" data-visibility=\"public\"><td class=\"label\">owner</td><td><div>ada</div></td></tr>"
        ));
    }

    #[test]
    fn test_only_declared_methods_are_listed() {
        let html = render(&account());
        assert!(html.contains("<td class=\"label\">Methods</td>"));
        assert!(html.contains("<td class=\"label\">deposit</td>"));
        assert!(html.contains("<td class=\"label\">open</td>"));
        assert!(!html.contains("__toString"));

        // deposit: one required, one optional parameter defaulting to null
        assert!(html.contains(
            "<tr><td>amount</td><td><div class=\"boolean\">FALSE</div></td><td><div>not available</div></td></tr>"
        ));
        assert!(html.contains(
            "<tr><td>memo</td><td><div class=\"boolean\">TRUE</div></td><td><div class=\"null\">NULL</div></td></tr>"
        ));
        assert!(html.contains("<div>Adds funds.</div>"));
        assert!(html.contains("<span class=\"label\">Return value:</span><span><div>bool</div></span>"));
        assert!(html.contains("<span class=\"label\">Static:</span><span><div class=\"boolean\">TRUE</div></span>"));
    }

    #[test]
    fn test_inherited_methods_only_omits_section() {
        let value = Value::object(
            Structure::new("Plain")
                .field("id", 7)
                .method(CallableDescriptor::new("__construct").inherited()),
        );
        let html = render(&value);

        assert!(html.contains("Properties"));
        assert!(!html.contains("Methods"));
        assert!(!html.contains("class=\"methods\""));
    }

    #[test]
    fn test_structure_without_members_has_no_sections() {
        let html = render(&Value::object(Structure::new("Marker")));
        assert_eq!(
            html,
            "<table class=\"debug object\"><thead><tr><th colspan=\"2\">Object Marker</th></tr></thead><tbody></tbody></table>"
        );
    }

    #[test]
    fn test_result_set_is_consumed_once() {
        let result_set = Rc::new(
            ResultSet::new("SELECT id, name FROM users", ["id", "name"])
                .row([Value::from(1), Value::from("ada")])
                .row([Value::from(2), Value::from("grace")]),
        );
        let value = Value::Object(result_set.clone());
        assert_eq!(result_set.remaining(), 2);

        let first = render(&value);
        assert_eq!(result_set.remaining(), 0);
        let second = render(&value);
        let sql_row = "<tr><td>SQL</td><td>SELECT id, name FROM users</td></tr>";

        assert!(first.contains("<th colspan=\"3\">Query Result</th>"));
        assert!(first.contains("<tr><td></td><td>id</td><td>name</td></tr>"));
        assert!(first.contains("<tr><td>0</td><td><div>1</div></td><td><div>ada</div></td></tr>"));
        assert!(first.contains("<tr><td>1</td><td><div>2</div></td><td><div>grace</div></td></tr>"));
        assert!(first.contains(sql_row));

        assert!(second.contains("<tr><td></td><td>id</td><td>name</td></tr>"));
        assert!(!second.contains("<tr><td>0</td>"));
        assert!(second.contains(sql_row));
    }

    #[test]
    fn test_short_rows_are_padded_to_the_header() {
        let result_set = ResultSet::new("SELECT a, b FROM t", ["a", "b"])
            .row([1])
            .row([2, 3, 4]);
        let html = render(&Value::object(result_set));

        assert!(html.contains(
            "<tr><td>0</td><td><div>1</div></td><td><div class=\"null\">NULL</div></td></tr>"
        ));
        assert!(html.contains("<tr><td>1</td><td><div>2</div></td><td><div>3</div></td></tr>"));
    }

    #[test]
    fn test_markup_tree_composition() {
        let tree = XmlElement::new("catalog")
            .with_text("root text")
            .with_attribute("version", "2")
            .with_child(
                XmlElement::new("book")
                    .with_text("")
                    .with_child(XmlElement::new("title").with_text("Dune")),
            )
            .with_child(XmlElement::new("magazine").with_text("Wired"));
        let html = render(&Value::object(tree));

        assert_eq!(count(&html, "<table class=\"debug xml\">"), 4);
        assert_eq!(count(&html, ">XmlAttributes<"), 1);
        // catalog and book have children; magazine and title do not
        assert_eq!(count(&html, ">XmlChildren<"), 2);
        assert_eq!(count(&html, ">XmlText<"), 4);

        assert!(html.contains("<td class=\"label\">catalog</td>"));
        assert!(html.contains(
            "<tr><td class=\"label\">version</td><td><div>2</div></td></tr>"
        ));
        assert!(html.contains("<div class=\"emptyString\">[empty string]</div>"));
        assert!(html.contains("<div>Dune</div>"));
    }

    #[test]
    fn test_handle_renders_kind_only() {
        let html = render(&Value::Handle(crate::Resource::socket()));
        assert_eq!(html, "socket");
    }

    #[test]
    fn test_faulting_field_is_contained() {
        let value = Value::object(
            Structure::new("Connection")
                .field("host", "db.local")
                .with_field(Field::faulted(
                    "socket",
                    Visibility::Protected,
                    InspectError::field_access("socket", "closed"),
                )),
        );
        let html = render(&value);

        assert!(html.contains("<div>db.local</div>"));
        assert!(html.contains("data-visibility=\"protected\""));
        assert!(html.contains(
            "<div class=\"inspectionError\">[error during inspection: field `socket` could not be read: closed]</div>"
        ));
    }

    #[test]
    fn test_markup_is_escaped() {
        let html = render(&Value::map([("<key>", "a & b")]));
        assert!(html.contains("<td class=\"label\">&lt;key&gt;</td>"));
        assert!(html.contains("<div>a &amp; b</div>"));
    }

    #[test]
    fn test_json_input_keeps_key_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": [true, null], "mid": 2.0}"#).unwrap();
        let html = render(&Value::from(json));

        let zeta = html.find(">zeta<").unwrap();
        let alpha = html.find(">alpha<").unwrap();
        let mid = html.find(">mid<").unwrap();
        assert!(zeta < alpha && alpha < mid);
        assert!(html.contains("<td class=\"label\">mid</td><td><div>2</div></td>"));
    }

    #[test]
    fn test_json_integers_beyond_i64_keep_their_digits() {
        let json: serde_json::Value =
            serde_json::from_str("[18446744073709551615, -9223372036854775808]").unwrap();
        let html = render(&Value::from(json));

        assert!(html.contains("<div>18446744073709551615</div>"));
        assert!(html.contains("<div>-9223372036854775808</div>"));
    }
}
