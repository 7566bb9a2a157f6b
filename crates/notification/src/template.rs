use askama::Template;

#[derive(Template)]
#[template(path = "emails/contact-message.html")]
pub struct ContactMessageHtml<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "emails/contact-message.txt")]
pub struct ContactMessagePlain<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}
