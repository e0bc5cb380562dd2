//! Three-step contact wizard: input, confirm, complete.
//!
//! The wizard owns the form fields, validation state, and step
//! progression. Validation runs only when the user tries to advance;
//! editing a field clears just that field's error, leaving the rest of
//! the error state intact until the next advance attempt. Submission
//! is a pure state transition; nothing leaves the process.

/// Inquiry types offered on the contact form, in display order.
pub const INQUIRY_TYPES: [(&str, &str); 4] = [
    ("document", "Request documents"),
    ("demo", "Request a demo"),
    ("consultation", "Consultation"),
    ("other", "Other"),
];

/// Wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStep {
    #[default]
    Input,
    Confirm,
    Complete,
}

/// A single editable field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    InquiryType,
    CompanyName,
    Name,
    Email,
    Phone,
    Challenge,
}

/// Raw form values. All fields are plain strings; `inquiry_type` holds
/// one of the [`INQUIRY_TYPES`] values once chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub inquiry_type: String,
    pub company_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub challenge: String,
}

/// Per-field validation messages. `None` means the field is valid or
/// has not been validated yet. Phone is optional and never carries an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub inquiry_type: Option<String>,
    pub company_name: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub challenge: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.inquiry_type.is_none()
            && self.company_name.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.challenge.is_none()
    }

    /// Error text for a field, if any.
    pub fn for_field(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::InquiryType => self.inquiry_type.as_deref(),
            ContactField::CompanyName => self.company_name.as_deref(),
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Challenge => self.challenge.as_deref(),
            ContactField::Phone => None,
        }
    }
}

/// Drives the contact form through input, confirmation, and completion.
#[derive(Debug, Clone, Default)]
pub struct ContactWizard {
    step: ContactStep,
    form: ContactForm,
    errors: FormErrors,
}

impl ContactWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> ContactStep {
        self.step
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Replace one field's value and clear that field's error.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::InquiryType => {
                self.form.inquiry_type = value;
                self.errors.inquiry_type = None;
            }
            ContactField::CompanyName => {
                self.form.company_name = value;
                self.errors.company_name = None;
            }
            ContactField::Name => {
                self.form.name = value;
                self.errors.name = None;
            }
            ContactField::Email => {
                self.form.email = value;
                self.errors.email = None;
            }
            ContactField::Phone => self.form.phone = value,
            ContactField::Challenge => {
                self.form.challenge = value;
                self.errors.challenge = None;
            }
        }
    }

    /// Validate and, if everything passes, move from input to the
    /// confirmation step. Returns `true` on success.
    pub fn advance(&mut self) -> bool {
        if self.step != ContactStep::Input {
            return false;
        }
        self.errors = validate(&self.form);
        if self.errors.is_empty() {
            self.step = ContactStep::Confirm;
            true
        } else {
            false
        }
    }

    /// Return from confirmation to the input step with all values
    /// preserved.
    pub fn back(&mut self) -> bool {
        if self.step == ContactStep::Confirm {
            self.step = ContactStep::Input;
            true
        } else {
            false
        }
    }

    /// Submit from the confirmation step.
    pub fn submit(&mut self) -> bool {
        if self.step == ContactStep::Confirm {
            self.step = ContactStep::Complete;
            true
        } else {
            false
        }
    }

    /// Start a fresh inquiry from the completion step.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

fn validate(form: &ContactForm) -> FormErrors {
    let mut errors = FormErrors::default();
    if form.inquiry_type.is_empty() {
        errors.inquiry_type = Some("Select an inquiry type".to_string());
    }
    if form.company_name.trim().is_empty() {
        errors.company_name = Some("Company name is required".to_string());
    }
    if form.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }
    if form.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !is_valid_email(&form.email) {
        errors.email = Some("Enter a valid email address".to_string());
    }
    if form.challenge.trim().is_empty() {
        errors.challenge = Some("Describe your challenge or question".to_string());
    }
    errors
}

/// Structural email check: one `@`, a non-empty local part, and a
/// domain with a dot separating two non-empty segments. No part may
/// contain whitespace.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((head, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if head.is_empty() || tld.is_empty() {
        return false;
    }
    !email.chars().any(char::is_whitespace)
}
