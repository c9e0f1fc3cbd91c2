//! Rendering context: walks the document tree and dispatches tags.

use super::Options;
use super::node::{RenderNode, RenderProp};
use crate::components::render_builtin;
use crate::registry::{Binding, Invocation, RegistryBinding};
use quivo_mdx_core::{
    ContentError, ContentNode, PropValue, RecoverableError, RenderDiagnostics, SourceLocation,
};
use std::collections::BTreeMap;

/// State for one render pass.
///
/// Holds the binding and options by reference and collects diagnostics;
/// nothing in it outlives the pass.
pub struct RenderContext<'a> {
    binding: &'a RegistryBinding,
    options: &'a Options,
    diagnostics: RenderDiagnostics,
}

impl<'a> RenderContext<'a> {
    /// Creates a context for one render pass.
    pub fn new(binding: &'a RegistryBinding, options: &'a Options) -> Self {
        Self {
            binding,
            options,
            diagnostics: RenderDiagnostics::new(),
        }
    }

    /// The binding this pass renders with.
    pub fn binding(&self) -> &'a RegistryBinding {
        self.binding
    }

    /// The options this pass renders with.
    pub fn options(&self) -> &'a Options {
        self.options
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &RenderDiagnostics {
        &self.diagnostics
    }

    /// Finishes the pass, returning its diagnostics.
    pub fn into_diagnostics(self) -> RenderDiagnostics {
        self.diagnostics
    }

    /// Records a non-fatal authoring problem.
    pub fn warn(&mut self, message: impl Into<String>, location: &SourceLocation) {
        let message = message.into();
        log::warn!("{}: {}", location, message);
        self.diagnostics.add_warning_at(message, location.clone());
    }

    /// Renders sibling nodes in order.
    pub fn render_children(
        &mut self,
        nodes: &[ContentNode],
    ) -> Result<Vec<RenderNode>, ContentError> {
        nodes.iter().map(|node| self.render_node(node)).collect()
    }

    /// Renders one node.
    ///
    /// In lenient mode a shape violation inside an element is recorded and
    /// that element renders as an empty fragment; in strict mode it aborts the
    /// pass.
    pub fn render_node(&mut self, node: &ContentNode) -> Result<RenderNode, ContentError> {
        match node {
            ContentNode::Text { value } => Ok(RenderNode::text(value)),
            ContentNode::Html { value } => Ok(RenderNode::Raw {
                html: value.clone(),
            }),
            ContentNode::Fragment { children } => {
                Ok(RenderNode::fragment(self.render_children(children)?))
            }
            ContentNode::Element {
                name,
                props,
                children,
                ..
            } => {
                let invocation = Invocation {
                    name,
                    props,
                    children,
                    location: node.location(),
                };
                match self.render_element(&invocation) {
                    Err(err) if err.is_validation() && !self.options.strict => {
                        log::warn!("Skipping invalid content: {}", err);
                        self.diagnostics.add_error(RecoverableError::from(&err));
                        Ok(RenderNode::empty())
                    }
                    result => result,
                }
            }
        }
    }

    fn render_element(&mut self, invocation: &Invocation<'_>) -> Result<RenderNode, ContentError> {
        let binding = self.binding;
        match binding.get(invocation.name) {
            Some(Binding::Builtin(tag)) => render_builtin(*tag, invocation, self),
            Some(Binding::Host(component)) => self.delegate(component, invocation),
            Some(Binding::Custom(renderer)) => renderer.render(invocation, self),
            None if is_intrinsic(invocation.name) => self.intrinsic(invocation),
            None => {
                log::debug!(
                    "<{}> is not bound; passing through to the host",
                    invocation.name
                );
                self.delegate(invocation.name, invocation)
            }
        }
    }

    fn delegate(
        &mut self,
        component: &str,
        invocation: &Invocation<'_>,
    ) -> Result<RenderNode, ContentError> {
        let props: BTreeMap<String, RenderProp> = invocation
            .props
            .iter()
            .map(|(key, value)| (key.clone(), RenderProp::from(value)))
            .collect();
        Ok(RenderNode::component(
            component,
            props,
            self.render_children(invocation.children)?,
        ))
    }

    fn intrinsic(&mut self, invocation: &Invocation<'_>) -> Result<RenderNode, ContentError> {
        let mut element = RenderNode::element(invocation.name);
        for (key, value) in invocation.props {
            match value {
                PropValue::Literal { value } => {
                    let key = if key == "className" { "class" } else { key.as_str() };
                    element = element.attr(key, value);
                }
                PropValue::Expression { value } => {
                    log::debug!(
                        "Dropping expression prop {}={{{}}} on <{}>",
                        key,
                        value,
                        invocation.name
                    );
                }
            }
        }
        Ok(element.children(self.render_children(invocation.children)?))
    }
}

/// Lowercase JSX names are intrinsic HTML elements.
fn is_intrinsic(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{HostComponents, Overrides};

    fn render(node: &ContentNode, binding: &RegistryBinding, options: &Options) -> RenderNode {
        RenderContext::new(binding, options).render_node(node).unwrap()
    }

    #[test]
    fn intrinsic_elements_keep_literal_props() {
        let node = ContentNode::element("span")
            .with_prop("className", "badge")
            .with_expression("style", "{{ color: 'red' }}")
            .with_child(ContentNode::text("new"));
        let out = render(&node, &RegistryBinding::fallback(), &Options::default());
        assert_eq!(out.to_markup(), "<span class=\"badge\">new</span>");
    }

    #[test]
    fn unbound_components_pass_through() {
        let node = ContentNode::element("Steps").with_child(ContentNode::text("x"));
        let out = render(&node, &RegistryBinding::fallback(), &Options::default());
        assert_eq!(out.to_markup(), "<Steps>x</Steps>");
    }

    #[test]
    fn host_defaults_delegate_by_name() {
        let host = HostComponents {
            defaults: vec!["pre".to_string()],
            ..Default::default()
        };
        let binding = RegistryBinding::compose(Some(&host), Overrides::new());
        let node = ContentNode::element("pre").with_child(ContentNode::text("code"));
        let out = render(&node, &binding, &Options::default());
        assert!(matches!(out, RenderNode::Component { ref name, .. } if name == "pre"));
    }

    #[test]
    fn lenient_mode_records_and_skips_invalid_tags() {
        let binding = RegistryBinding::fallback();
        let options = Options::lenient();
        let mut cx = RenderContext::new(&binding, &options);
        let doc = ContentNode::fragment(vec![
            ContentNode::element("Card").at(SourceLocation::new(3, 1)),
            ContentNode::text("after"),
        ]);
        let out = cx.render_node(&doc).unwrap();
        assert_eq!(out.to_markup(), "after");
        let diagnostics = cx.into_diagnostics();
        assert_eq!(diagnostics.errors.len(), 1);
        assert_eq!(diagnostics.errors[0].location, SourceLocation::new(3, 1));
    }

    #[test]
    fn strict_mode_surfaces_tag_and_location() {
        let binding = RegistryBinding::fallback();
        let options = Options::default();
        let node = ContentNode::element("Card").at(SourceLocation::with_file("guide.mdx", 7, 3));
        let err = RenderContext::new(&binding, &options)
            .render_node(&node)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid <Card> at guide.mdx:7:3: missing required `title` prop"
        );
    }
}
