pub const SUBMITTING_LABEL: &str = "Publishing...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    ImageUrl,
    Description,
}

impl RequiredField {
    /// Checks run in this order and stop at the first failure.
    pub const ORDER: [RequiredField; 3] = [
        RequiredField::Title,
        RequiredField::ImageUrl,
        RequiredField::Description,
    ];

    pub fn prompt(self) -> &'static str {
        match self {
            RequiredField::Title => "Please enter a title for your artwork",
            RequiredField::ImageUrl => "Please provide an image URL for your artwork",
            RequiredField::Description => "Please enter a description for your artwork",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", .field.prompt())]
pub struct ValidationError {
    pub field: RequiredField,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtworkDraft {
    pub title: String,
    pub image_url: String,
    pub description: String,
}

impl ArtworkDraft {
    pub fn new(title: &str, image_url: &str, description: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            image_url: image_url.trim().to_string(),
            description: description.trim().to_string(),
        }
    }

    pub fn value(&self, field: RequiredField) -> &str {
        match field {
            RequiredField::Title => &self.title,
            RequiredField::ImageUrl => &self.image_url,
            RequiredField::Description => &self.description,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match RequiredField::ORDER
            .into_iter()
            .find(|field| self.value(*field).is_empty())
        {
            Some(field) => Err(ValidationError { field }),
            None => Ok(()),
        }
    }
}
