use tracing::{debug, warn};

use crate::error::InspectError;
use crate::parser::DocParser;
use crate::renderer::classify::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;
use crate::value::*;

/// Shown instead of nothing when a string is empty.
pub const EMPTY_STRING_MARKER: &str = "[empty string]";

/// Shown when a parameter default cannot be determined.
pub const UNAVAILABLE_DEFAULT: &str = "not available";

pub fn render_boolean(value: bool) -> String {
    div(Some("boolean"), if value { "TRUE" } else { "FALSE" })
}

pub fn render_null() -> String {
    div(Some("null"), "NULL")
}

pub fn render_scalar(scalar: Scalar<'_>) -> String {
    match scalar {
        Scalar::Str("") => div(Some("emptyString"), EMPTY_STRING_MARKER),
        Scalar::Str(text) => div(None, &escape(text)),
        Scalar::Int(i) => div(None, &i.to_string()),
        Scalar::Float(x) => div(None, &format_float(x)),
    }
}

/// Whole floats print without a fraction; non-finite ones as `NAN`/`INF`.
/// Magnitudes from `1e15` up, or below `1e-4`, use exponent form (`1.0E+300`).
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        "NAN".to_string()
    } else if x.is_infinite() {
        let sign = if x > 0.0 { "" } else { "-" };
        format!("{}INF", sign)
    } else if x != 0.0 && (x.abs() >= 1e15 || x.abs() < 1e-4) {
        format_exponent(x)
    } else if x.fract() == 0.0 {
        format!("{:.0}", x)
    } else {
        x.to_string()
    }
}

fn format_exponent(x: f64) -> String {
    let formatted = format!("{:e}", x);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((&formatted, "0"));
    let fraction = if mantissa.contains('.') { "" } else { ".0" };
    let sign = if exponent.starts_with('-') { "" } else { "+" };
    format!("{}{}E{}{}", mantissa, fraction, sign, exponent)
}

pub fn render_inspection_error(error: &InspectError) -> String {
    warn!(%error, "value faulted during inspection");
    div(
        Some("inspectionError"),
        &format!("[error during inspection: {}]", escape(&error.to_string())),
    )
}

/// Sequences and mappings share one layout; only class and title differ.
pub fn render_container(entries: &[(Key, Value)], indexed: bool, context: &RenderContext) -> String {
    let (class, title) = if indexed {
        ("indexedArray", "Indexed Array")
    } else {
        ("associativeArray", "Associative Array")
    };
    let title = if entries.is_empty() {
        format!("{} [empty]", title)
    } else {
        title.to_string()
    };

    let child_context = context.descend();
    let mut table = TableWriter::debug(class).title(&title, 2);
    for (key, value) in entries {
        table.label_row(&key.to_string(), &value.render(&child_context));
    }
    table.finish()
}

impl Render for Resource {
    fn render(&self, _context: &RenderContext) -> String {
        escape(&self.kind).into_owned()
    }
}

pub fn render_structured(object: &dyn Inspect, context: &RenderContext) -> String {
    let strategy = select_strategy(object);
    debug!(
        type_name = object.type_name(),
        ?strategy,
        depth = context.depth,
        "rendering structured value"
    );

    match (strategy, object.as_query_result(), object.as_markup_node()) {
        (StructuredStrategy::QueryResultHandle, Some(query), _) => render_query_result(query, context),
        (StructuredStrategy::MarkupTreeNode, _, Some(node)) => render_markup_document(node, context),
        _ => render_generic(object, context),
    }
}

/// Fields and declared methods of an arbitrary structured value.
pub fn render_generic(object: &dyn Inspect, context: &RenderContext) -> String {
    let child_context = context.descend();
    let mut table = TableWriter::debug("object").title(&format!("Object {}", object.type_name()), 2);

    let fields = object.fields();
    if !fields.is_empty() {
        let mut props = TableWriter::new("props");
        for field in &fields {
            let content = match &field.value {
                Ok(value) => value.render(&child_context),
                Err(error) => render_inspection_error(error),
            };
            props.label_row_with(
                &format!(
                    "class=\"prop\" data-visibility=\"{}\"",
                    field.visibility.as_str()
                ),
                &field.name,
                &content,
            );
        }
        table.label_row("Properties", &props.finish());
    }

    // Universal behavior inherited from a base is noise
    let methods: Vec<CallableDescriptor> = object
        .methods()
        .into_iter()
        .filter(|method| method.is_declared())
        .collect();
    if !methods.is_empty() {
        let mut rows = TableWriter::new("methods");
        for method in &methods {
            rows.raw_row(&method.render(&child_context));
        }
        table.label_row("Methods", &rows.finish());
    }

    table.finish()
}

/// One row of a `methods` table.
impl Render for CallableDescriptor {
    fn render(&self, context: &RenderContext) -> String {
        let doc_parser = DocParser::new();
        let mut info = String::from("<div class=\"methodInfo\"><span class=\"label\">Arguments:</span>");

        if self.parameters.is_empty() {
            info.push_str("<span>none</span>");
        } else {
            let mut args = TableWriter::new("args").header(&["Name", "Optional", "Default"]);
            for parameter in &self.parameters {
                args.raw_row(&parameter.render(context));
            }
            info.push_str(&args.finish());
        }

        info.push_str(&info_line("Static:", &Value::Bool(self.is_static).render(context)));

        if let Some(raw) = &self.doc_comment {
            let doc = doc_parser.parse(raw);
            info.push_str(&info_line(
                "Description:",
                &Value::from(doc.short_description.as_str()).render(context),
            ));
            if let Some(return_type) = doc.return_type() {
                info.push_str(&info_line("Return value:", &Value::from(return_type).render(context)));
            }
        }

        info.push_str("</div>");
        format!(
            "<tr><td class=\"label\">{}</td><td>{}</td></tr>",
            escape(&self.name),
            info
        )
    }
}

/// One row of an `args` table.
impl Render for Parameter {
    fn render(&self, context: &RenderContext) -> String {
        let default = match &self.default {
            ParamDefault::Value(value) => value.render(context),
            ParamDefault::Unavailable => Value::from(UNAVAILABLE_DEFAULT).render(context),
        };
        format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&self.name),
            Value::Bool(self.optional).render(context),
            default
        )
    }
}

/// Result grid plus query text. Drains the cursor.
pub fn render_query_result(query: &dyn QueryResult, context: &RenderContext) -> String {
    let child_context = context.descend();
    let columns: Vec<String> = (0..query.column_count())
        .map(|index| query.column_name(index).unwrap_or_default())
        .collect();

    let mut grid = TableWriter::debug("queryResult").title("Query Result", columns.len() + 1);
    grid.cells_row(std::iter::once(String::new()).chain(columns.iter().map(|c| escape(c).into_owned())));

    match query.fetch_all() {
        Ok(rows) => {
            debug!(rows = rows.len(), "fetched remaining result rows");
            for (index, row) in rows.iter().enumerate() {
                let mut cells: Vec<String> = row
                    .iter()
                    .take(columns.len())
                    .map(|(_, cell)| cell.render(&child_context))
                    .collect();
                cells.resize(columns.len(), String::new());
                grid.cells_row(std::iter::once(index.to_string()).chain(cells));
            }
        }
        Err(error) => {
            grid.raw_row(&format!(
                "<tr><td colspan=\"{}\">{}</td></tr>",
                columns.len() + 1,
                render_inspection_error(&error)
            ));
        }
    }

    let mut table = TableWriter::debug("query").title("Query", 2);
    table.cells_row(["Result set".to_string(), grid.finish()]);
    table.cells_row(["SQL".to_string(), escape(&query.query_text()).into_owned()]);
    table.finish()
}

/// `XML` table wrapping one node.
pub fn render_markup_document(node: &dyn MarkupNode, context: &RenderContext) -> String {
    let mut table = TableWriter::debug("xml").title("XML", 2);
    table.label_row(node.name(), &render_markup_node(node, &context.descend()));
    table.finish()
}

fn render_markup_node(node: &dyn MarkupNode, context: &RenderContext) -> String {
    let mut table = TableWriter::new("xml");
    table.label_row("XmlText", &Value::from(node.text()).render(context));

    let attributes = node.attributes();
    if !attributes.is_empty() {
        table.label_row("XmlAttributes", &Value::map(attributes).render(context));
    }

    let children = node.children();
    if !children.is_empty() {
        let child_context = context.descend();
        let rendered: String = children
            .iter()
            .map(|child| render_markup_document(*child, &child_context))
            .collect();
        table.label_row("XmlChildren", &rendered);
    }

    table.finish()
}
