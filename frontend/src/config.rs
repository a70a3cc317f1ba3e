// Contact form endpoint, baked in at build time:
//   CONTACT_ENDPOINT=https://example.com/api/leads trunk build --release
// Without it the form only acknowledges submissions locally.

#[cfg(debug_assertions)]
pub fn contact_endpoint() -> Option<&'static str> {
    // Local backend during development, if one is running
    option_env!("CONTACT_ENDPOINT_DEV")
        .or(option_env!("CONTACT_ENDPOINT"))
        .filter(|url| !url.is_empty())
}

#[cfg(not(debug_assertions))]
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("CONTACT_ENDPOINT").filter(|url| !url.is_empty())
}
