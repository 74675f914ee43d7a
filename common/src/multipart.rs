//! Flattened multipart bodies. Updates go out as `POST` with a `_method=PUT`
//! part because the backend cannot parse multipart on `PUT`.

/// Name of the part that overrides the HTTP verb.
pub const METHOD_OVERRIDE: &str = "_method";

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue<'a, F> {
    Text(String),
    File(&'a F),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormPart<'a, F> {
    pub name: String,
    pub value: PartValue<'a, F>,
}

/// Ordered multipart body borrowing any files from their owner.
#[derive(Debug, Clone, PartialEq)]
pub struct FormBody<'a, F> {
    parts: Vec<FormPart<'a, F>>,
}

impl<F> Default for FormBody<'_, F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<'a, F> FormBody<'a, F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body whose first part is `_method=PUT`.
    pub fn put_override() -> Self {
        let mut body = Self::new();
        body.text(METHOD_OVERRIDE, "PUT");
        body
    }

    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: PartValue::Text(value.into()),
        });
        self
    }

    /// Adds a text part only when `value` is not blank.
    pub fn text_if_present(&mut self, name: impl Into<String>, value: &str) -> &mut Self {
        if !value.trim().is_empty() {
            self.text(name, value);
        }
        self
    }

    pub fn file(&mut self, name: impl Into<String>, file: &'a F) -> &mut Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: PartValue::File(file),
        });
        self
    }

    pub fn parts(&self) -> &[FormPart<'a, F>] {
        &self.parts
    }

    /// First text value under `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match &part.value {
            PartValue::Text(value) if part.name == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// All files under `name`, in insertion order.
    pub fn files(&self, name: &str) -> Vec<&'a F> {
        self.parts
            .iter()
            .filter(|part| part.name == name)
            .filter_map(|part| match part.value {
                PartValue::File(file) => Some(file),
                PartValue::Text(_) => None,
            })
            .collect()
    }

    pub fn is_update(&self) -> bool {
        self.text_value(METHOD_OVERRIDE) == Some("PUT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_skips_blank_optional_text() {
        let photo = "photo.jpg";
        let mut body = FormBody::put_override();
        body.text("title", "Villa Cocody")
            .text_if_present("capacity", "  ")
            .file("image", &photo);

        let names: Vec<_> = body.parts().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["_method", "title", "image"]);
        assert!(body.is_update());
        assert_eq!(body.files("image"), vec![&photo]);
    }
}
