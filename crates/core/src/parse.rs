//! MDX source adapter.
//!
//! The documentation host normally owns MDX parsing. This adapter builds the
//! same [`ContentNode`] tree from source with markdown-rs so pages can be
//! rendered without the host (previews, tests, the WASM entry point).

use crate::{ContentError, ContentNode, PropValue, SourceLocation};
use markdown::mdast::{AttributeContent, AttributeValue, Node};
use markdown::message::{Message, Place};
use std::collections::BTreeMap;

/// Parser options for building markdown-rs parse options.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// Enable MDX constructs (JSX, ESM, expressions).
    pub mdx: bool,
    /// Enable GitHub Flavored Markdown constructs.
    pub gfm: bool,
    /// Enable YAML frontmatter parsing.
    pub frontmatter: bool,
}

impl ParseOptions {
    /// MDX-friendly defaults (JSX/ESM/expression enabled).
    pub const fn mdx() -> Self {
        Self {
            mdx: true,
            gfm: true,
            frontmatter: true,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            // Indented JSX children must not turn into code blocks.
            code_indented: !self.mdx,
            html_flow: !self.mdx,
            html_text: !self.mdx,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        if self.mdx {
            constructs.mdx_esm = true;
            constructs.mdx_expression_flow = true;
            constructs.mdx_expression_text = true;
            constructs.mdx_jsx_flow = true;
            constructs.mdx_jsx_text = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::mdx()
    }
}

/// Parse MDX into an MDAST tree.
pub fn parse_mdast(input: &str, options: &ParseOptions) -> Result<Node, ContentError> {
    markdown::to_mdast(input, &options.to_markdown()).map_err(|err| {
        let location = message_location(&err);
        ContentError::parse_error(err.to_string(), location.line, location.column)
    })
}

/// Parse MDX source into a document tree with default options.
///
/// # Examples
///
/// ```
/// use quivo_mdx_core::parse_document;
///
/// let doc = parse_document("<Note>Read this first.</Note>").unwrap();
/// assert_eq!(doc.children()[0].name(), Some("Note"));
/// ```
pub fn parse_document(input: &str) -> Result<ContentNode, ContentError> {
    parse_document_with_options(input, &ParseOptions::default(), None)
}

/// Parse MDX source into a document tree, tagging positions with `file` when given.
pub fn parse_document_with_options(
    input: &str,
    options: &ParseOptions,
    file: Option<&str>,
) -> Result<ContentNode, ContentError> {
    let root = parse_mdast(input, options).map_err(|err| match (err, file) {
        (ContentError::Parse { message, location }, Some(file)) => ContentError::Parse {
            message,
            location: SourceLocation::with_file(file, location.line, location.column),
        },
        (err, _) => err,
    })?;
    Ok(convert(&root, file).unwrap_or_else(|| ContentNode::fragment(Vec::new())))
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}

fn node_location(node: &Node, file: Option<&str>) -> Option<SourceLocation> {
    node.position().map(|position| match file {
        Some(file) => SourceLocation::with_file(file, position.start.line, position.start.column),
        None => SourceLocation::new(position.start.line, position.start.column),
    })
}

fn convert_children(children: &[Node], file: Option<&str>) -> Vec<ContentNode> {
    children
        .iter()
        .filter_map(|child| convert(child, file))
        .collect()
}

fn intrinsic(
    name: &str,
    props: BTreeMap<String, PropValue>,
    children: Vec<ContentNode>,
    node: &Node,
    file: Option<&str>,
) -> ContentNode {
    ContentNode::Element {
        name: name.to_string(),
        props,
        children,
        position: node_location(node, file),
    }
}

fn jsx_props(attributes: &[AttributeContent]) -> BTreeMap<String, PropValue> {
    let mut props = BTreeMap::new();
    for attr in attributes {
        match attr {
            AttributeContent::Property(prop) => {
                let value = match &prop.value {
                    Some(AttributeValue::Literal(s)) => PropValue::literal(s.clone()),
                    Some(AttributeValue::Expression(expr)) => {
                        PropValue::expression(expr.value.clone())
                    }
                    None => PropValue::literal(String::new()),
                };
                props.insert(prop.name.clone(), value);
            }
            AttributeContent::Expression(expr) => {
                log::debug!("Spread attribute dropped: {{{}}}", expr.value);
            }
        }
    }
    props
}

fn convert_jsx(
    name: Option<&str>,
    attributes: &[AttributeContent],
    children: &[Node],
    node: &Node,
    file: Option<&str>,
) -> ContentNode {
    let children = convert_children(children, file);
    match name {
        Some(name) => intrinsic(name, jsx_props(attributes), children, node, file),
        None => ContentNode::fragment(children),
    }
}

fn convert(node: &Node, file: Option<&str>) -> Option<ContentNode> {
    let simple = |name: &str, children: &[Node]| {
        intrinsic(
            name,
            BTreeMap::new(),
            convert_children(children, file),
            node,
            file,
        )
    };

    let converted = match node {
        Node::Root(root) => ContentNode::fragment(convert_children(&root.children, file)),
        Node::Text(text) => ContentNode::text(&text.value),
        Node::Html(html) => ContentNode::Html {
            value: html.value.clone(),
        },
        Node::Paragraph(para) => simple("p", &para.children),
        Node::Heading(heading) => simple(format!("h{}", heading.depth).as_str(), &heading.children),
        Node::Strong(strong) => simple("strong", &strong.children),
        Node::Emphasis(emphasis) => simple("em", &emphasis.children),
        Node::Delete(delete) => simple("del", &delete.children),
        Node::Blockquote(quote) => simple("blockquote", &quote.children),
        Node::ListItem(item) => simple("li", &item.children),
        Node::List(list) => simple(if list.ordered { "ol" } else { "ul" }, &list.children),
        Node::Table(table) => simple("table", &table.children),
        Node::TableRow(row) => simple("tr", &row.children),
        Node::TableCell(cell) => simple("td", &cell.children),
        Node::ThematicBreak(_) => simple("hr", &[]),
        Node::Break(_) => simple("br", &[]),
        Node::InlineCode(code) => intrinsic(
            "code",
            BTreeMap::new(),
            vec![ContentNode::text(&code.value)],
            node,
            file,
        ),
        Node::Code(code) => {
            let mut props = BTreeMap::new();
            if let Some(lang) = &code.lang {
                props.insert(
                    "class".to_string(),
                    PropValue::literal(format!("language-{}", lang)),
                );
            }
            let inner = ContentNode::Element {
                name: "code".to_string(),
                props,
                children: vec![ContentNode::text(&code.value)],
                position: None,
            };
            intrinsic("pre", BTreeMap::new(), vec![inner], node, file)
        }
        Node::Link(link) => {
            let mut props = BTreeMap::new();
            props.insert("href".to_string(), PropValue::literal(&link.url));
            if let Some(title) = &link.title {
                props.insert("title".to_string(), PropValue::literal(title));
            }
            intrinsic("a", props, convert_children(&link.children, file), node, file)
        }
        Node::Image(image) => {
            let mut props = BTreeMap::new();
            props.insert("src".to_string(), PropValue::literal(&image.url));
            props.insert("alt".to_string(), PropValue::literal(&image.alt));
            intrinsic("img", props, Vec::new(), node, file)
        }
        Node::MdxJsxFlowElement(elem) => convert_jsx(
            elem.name.as_deref(),
            &elem.attributes,
            &elem.children,
            node,
            file,
        ),
        Node::MdxJsxTextElement(elem) => convert_jsx(
            elem.name.as_deref(),
            &elem.attributes,
            &elem.children,
            node,
            file,
        ),
        Node::MdxjsEsm(_) | Node::Yaml(_) | Node::Toml(_) => return None,
        Node::MdxFlowExpression(_) | Node::MdxTextExpression(_) => {
            log::debug!("Expression left to the host compiler: {:?}", node.position());
            return None;
        }
        _ => {
            log::warn!("Unhandled markdown node type: {:?}", node);
            return None;
        }
    };
    Some(converted)
}
