use serde::Serialize;
use utoipa::ToSchema;

/// One span of renderable text. Renderers decide how `strong` and `break`
/// look; consumers that cannot render spans use [`RichText::plain`].
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Inline {
    Text(String),
    Strong(String),
    Break,
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(value.into())
    }

    pub fn strong(value: impl Into<String>) -> Self {
        Inline::Strong(value.into())
    }
}

/// An ordered list of spans. Serializes as a plain JSON array.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct RichText(pub Vec<Inline>);

impl RichText {
    /// A fragment holding a single unstyled span.
    pub fn plain_text(value: impl Into<String>) -> Self {
        RichText(vec![Inline::Text(value.into())])
    }

    /// Flattens the fragment to one string. Breaks collapse to a space.
    pub fn plain(&self) -> String {
        let mut out = String::new();
        for span in &self.0 {
            match span {
                Inline::Text(text) | Inline::Strong(text) => out.push_str(text),
                Inline::Break => out.push(' '),
            }
        }
        out
    }
}
