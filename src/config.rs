use artfolio_core::PageConfig;

pub const API_BASE_ATTRIBUTE: &str = "data-api-base";
pub const FILTER_BINDING_ATTRIBUTE: &str = "data-bind-filters";

/// Builds the page configuration. The API base comes from the build
/// environment, then from `<body data-api-base>`, then defaults to same origin.
/// `<body data-bind-filters>` lets the filter selectors submit on `change`
/// without template handlers.
pub fn load_page_config() -> PageConfig {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    let base = option_env!("ARTFOLIO_API_BASE")
        .filter(|raw| !raw.trim().is_empty())
        .map(str::to_string)
        .or_else(|| {
            body.as_ref()
                .and_then(|body| body.get_attribute(API_BASE_ATTRIBUTE))
        })
        .unwrap_or_default();
    PageConfig {
        bind_filter_changes: body
            .as_ref()
            .is_some_and(|body| body.has_attribute(FILTER_BINDING_ATTRIBUTE)),
        ..PageConfig::with_api_base(&base)
    }
}
