use crate::assistant_error::AssistantError;

/// Kind of JSON payload a feature expects back from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Object,
    Array,
}

impl JsonShape {
    pub fn delimiters(self) -> (char, char) {
        match self {
            JsonShape::Object => ('{', '}'),
            JsonShape::Array => ('[', ']'),
        }
    }
}

/// Locates the substring of a chat reply that is intended to be
/// machine-readable. The backend is instructed to emit only JSON but is
/// observed to sometimes wrap it in prose, so everything outside the
/// outermost delimiter span is treated as conversational filler.
pub fn extract(raw: &str, shape: JsonShape) -> Result<&str, AssistantError> {
    let (open, close) = shape.delimiters();

    let start = raw.find(open).ok_or_else(|| {
        AssistantError::extraction(format!("no opening '{}' found in reply", open), raw)
    })?;
    let end = raw.rfind(close).ok_or_else(|| {
        AssistantError::extraction(format!("no closing '{}' found in reply", close), raw)
    })?;

    if end < start {
        return Err(AssistantError::extraction(
            format!("closing '{}' appears before opening '{}'", close, open),
            raw,
        ));
    }

    Ok(&raw[start..=end])
}
