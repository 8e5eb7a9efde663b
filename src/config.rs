/// Formspree endpoint the contact form posts to. Leave this empty until the
/// form has been provisioned; submission stays blocked client-side while the
/// value is unset.
pub fn get_form_endpoint() -> &'static str {
    "https://formspree.io/f/mrbjpwad"
}
