use std::fmt;

/// Parsed type expression.
///
/// A node either wraps an inner expression (`BASE [INNER]`), is repeated
/// (`BASE [...]`), or is a bare leaf. The parser never produces a node that is
/// both.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TypeExpr {
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner: Option<Box<TypeExpr>>,
    pub repeated: bool,
}

impl TypeExpr {
    pub fn leaf(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            inner: None,
            repeated: false,
        }
    }

    pub fn repeated(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            inner: None,
            repeated: true,
        }
    }

    pub fn nested(base: impl Into<String>, inner: TypeExpr) -> Self {
        Self {
            base: base.into(),
            inner: Some(Box::new(inner)),
            repeated: false,
        }
    }

    /// Walks the chain from this node to the innermost one.
    pub fn chain(&self) -> impl Iterator<Item = &TypeExpr> {
        std::iter::successors(Some(self), |node| node.inner.as_deref())
    }

    /// The innermost node of the chain.
    pub fn terminal(&self) -> &TypeExpr {
        let mut node = self;
        while let Some(inner) = node.inner.as_deref() {
            node = inner;
        }
        node
    }

    /// Canonical text form: `BASE`, `BASE [...]` or `BASE [INNER]`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        out.push_str(&self.base);
        if self.repeated {
            out.push_str(" [...]");
        } else if let Some(inner) = &self.inner {
            out.push_str(" [");
            inner.render_into(out);
            out.push(']');
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
