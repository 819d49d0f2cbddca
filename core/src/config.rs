/// Element ids and selectors the widgets bind to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomIds {
    pub artwork_form: &'static str,
    pub title: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
    pub image_preview: &'static str,
    pub tag_entry: &'static str,
    pub tag_container: &'static str,
    pub tags_field: &'static str,
    pub process_images: &'static str,
    pub process_preview: &'static str,
    pub search_form: &'static str,
    pub search_query: &'static str,
    pub medium_filter: &'static str,
    pub year_filter: &'static str,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            artwork_form: "artworkForm",
            title: "title",
            image_url: "image_url",
            description: "description",
            image_preview: "imagePreview",
            tag_entry: "tags",
            tag_container: "tagsContainer",
            tags_field: "tagsInput",
            process_images: "process_images",
            process_preview: "processImagesPreview",
            search_form: "searchForm",
            search_query: "input[name=\"q\"]",
            medium_filter: "mediumFilter",
            year_filter: "yearFilter",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassNames {
    pub like_button: &'static str,
    pub liked: &'static str,
    pub likes_count: &'static str,
    pub artwork_card: &'static str,
    pub tag_chip: &'static str,
    pub remove_tag: &'static str,
    pub process_image: &'static str,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            like_button: "like-btn",
            liked: "liked",
            likes_count: "likes-count",
            artwork_card: "artwork-card",
            tag_chip: "tag-badge",
            remove_tag: "remove-tag",
            process_image: "process-image-preview",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageConfig {
    /// Prefix for API requests. Empty means same origin.
    pub api_base: String,
    pub ids: DomIds,
    pub classes: ClassNames,
    /// Bind the filter selectors' `change` events at mount. Off for templates
    /// that call `applyFilters` themselves.
    pub bind_filter_changes: bool,
}

impl PageConfig {
    pub fn with_api_base(raw: &str) -> Self {
        Self {
            api_base: normalize_api_base(raw),
            ..Self::default()
        }
    }
}

pub fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
