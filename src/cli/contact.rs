use anyhow::Result;
use folio::config::Config;
use folio_contact::{ContactForm, ContactFormConfig, Field};

pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub endpoint: Option<String>,
}

/// Fills the contact form from the command line and submits it to a relay.
pub async fn send(config: Config, input: ContactInput) -> Result<()> {
    let mut form_config = ContactFormConfig::from(&config.contact);
    if let Some(endpoint) = input.endpoint {
        form_config.endpoint = endpoint;
    }

    tracing::info!(endpoint = %form_config.endpoint, "Submitting contact form");

    let mut form = ContactForm::http(form_config);
    form.update_field(Field::Name, input.name);
    form.update_field(Field::Email, input.email);
    form.update_field(Field::Subject, input.subject);
    form.update_field(Field::Message, input.message);

    let status = form.submit().await;

    println!("{}", status.message);

    if !status.success {
        anyhow::bail!("contact form was not sent");
    }

    Ok(())
}
