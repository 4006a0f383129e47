//! Three-step account opening form: field state and per-step validation.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const TOTAL_STEPS: u8 = 3;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email regex is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// `(value, label)` pairs for the account type select
pub const ACCOUNT_TYPES: [(&str, &str); 4] = [
    ("savings", "Savings Account"),
    ("checking", "Checking Account"),
    ("business", "Business Account"),
    ("premium", "Premium Account"),
];

pub const EMPLOYMENT_STATUSES: [(&str, &str); 5] = [
    ("employed", "Employed"),
    ("self-employed", "Self-Employed"),
    ("unemployed", "Unemployed"),
    ("student", "Student"),
    ("retired", "Retired"),
];

pub const DOCUMENT_TYPES: [(&str, &str); 5] = [
    ("ID Proof", "ID Proof (Driver's License, Passport)"),
    ("Address Proof", "Address Proof (Utility Bill, Lease)"),
    ("Income Proof", "Income Proof (Pay Stub, Tax Return)"),
    ("Bank Statement", "Bank Statement"),
    ("Other", "Other"),
];

pub const STEP_LABELS: [&str; 3] = ["Personal Info", "Account Details", "Documents"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid initial deposit amount")]
    InvalidDeposit,
    #[error("Please specify document type for all documents")]
    MissingDocumentType,
    #[error("Please upload all required documents")]
    MissingDocumentFile,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl PersonalInfo {
    pub fn validate(&self) -> Result<(), FormError> {
        let text_fields = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.address,
            &self.city,
            &self.state,
            &self.zip_code,
        ];
        if text_fields.iter().any(|f| f.trim().is_empty()) || self.date_of_birth.is_none() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_type: String,
    pub initial_deposit: String,
    pub purpose: String,
    pub employment_status: String,
    pub annual_income: String,
}

impl Default for AccountInfo {
    fn default() -> Self {
        Self {
            account_type: "savings".to_string(),
            initial_deposit: String::new(),
            purpose: String::new(),
            employment_status: "employed".to_string(),
            annual_income: String::new(),
        }
    }
}

impl AccountInfo {
    pub fn validate(&self) -> Result<(), FormError> {
        let fields = [
            &self.account_type,
            &self.initial_deposit,
            &self.purpose,
            &self.employment_status,
            &self.annual_income,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(FormError::MissingFields);
        }
        match self.initial_deposit.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(()),
            _ => Err(FormError::InvalidDeposit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSlot {
    pub id: String,
    pub doc_type: String,
    pub file_name: String,
}

impl DocumentSlot {
    pub fn new(doc_type: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            doc_type: doc_type.into(),
            file_name: String::new(),
        }
    }
}

/// Everything the form collected, handed over on submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountApplication {
    pub personal: PersonalInfo,
    pub account: AccountInfo,
    pub documents: Vec<DocumentSlot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountOpeningForm {
    step: u8,
    pub personal: PersonalInfo,
    pub account: AccountInfo,
    documents: Vec<DocumentSlot>,
}

impl Default for AccountOpeningForm {
    fn default() -> Self {
        Self {
            step: 1,
            personal: PersonalInfo::default(),
            account: AccountInfo::default(),
            documents: vec![DocumentSlot::new("ID Proof"), DocumentSlot::new("Address Proof")],
        }
    }
}

impl AccountOpeningForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step, 1-based
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_last_step(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    pub fn documents(&self) -> &[DocumentSlot] {
        &self.documents
    }

    pub fn validate_step(&self, step: u8) -> Result<(), FormError> {
        match step {
            1 => self.personal.validate(),
            2 => self.account.validate(),
            _ => self.validate_documents(),
        }
    }

    fn validate_documents(&self) -> Result<(), FormError> {
        if self.documents.is_empty() {
            return Err(FormError::MissingDocumentFile);
        }
        if self.documents.iter().any(|d| d.doc_type.trim().is_empty()) {
            return Err(FormError::MissingDocumentType);
        }
        if self.documents.iter().any(|d| d.file_name.is_empty()) {
            return Err(FormError::MissingDocumentFile);
        }
        Ok(())
    }

    /// Advance when the current step validates; returns the new step
    pub fn next(&mut self) -> Result<u8, FormError> {
        self.validate_step(self.step)?;
        if self.step < TOTAL_STEPS {
            self.step += 1;
            log::debug!("account form advanced to step {}", self.step);
        }
        Ok(self.step)
    }

    pub fn previous(&mut self) -> u8 {
        if self.step > 1 {
            self.step -= 1;
        }
        self.step
    }

    pub fn add_document(&mut self) -> &DocumentSlot {
        self.documents.push(DocumentSlot::new(""));
        &self.documents[self.documents.len() - 1]
    }

    /// Whether a slot may be removed; the form always keeps one
    pub fn can_remove_document(&self) -> bool {
        self.documents.len() > 1
    }

    /// Drop slot `id` unless it is the last one. Returns true when removed.
    pub fn remove_document(&mut self, id: &str) -> bool {
        if !self.can_remove_document() {
            return false;
        }
        let before = self.documents.len();
        self.documents.retain(|d| d.id != id);
        self.documents.len() != before
    }

    pub fn set_document_type(&mut self, id: &str, doc_type: &str) {
        if let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) {
            doc.doc_type = doc_type.to_string();
        }
    }

    /// Record the chosen file; `None` clears it
    pub fn set_document_file(&mut self, id: &str, file_name: Option<&str>) {
        if let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) {
            doc.file_name = file_name.unwrap_or_default().to_string();
        }
    }

    /// Validate the final step and produce the collected application
    pub fn submit(&self) -> Result<AccountApplication, FormError> {
        self.validate_documents()?;
        Ok(AccountApplication {
            personal: self.personal.clone(),
            account: self.account.clone(),
            documents: self.documents.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_personal() -> PersonalInfo {
        PersonalInfo {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+1 234 567 8900".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10),
            address: "1 Main St".into(),
            city: "London".into(),
            state: "LDN".into(),
            zip_code: "10001".into(),
        }
    }

    fn filled_account() -> AccountInfo {
        AccountInfo {
            initial_deposit: "250.50".into(),
            purpose: "Savings".into(),
            annual_income: "50000".into(),
            ..AccountInfo::default()
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
    }

    #[test]
    fn test_step_one_validation() {
        let mut form = AccountOpeningForm::new();
        assert_eq!(form.next(), Err(FormError::MissingFields));
        assert_eq!(form.step(), 1);

        form.personal = filled_personal();
        form.personal.date_of_birth = None;
        assert_eq!(form.next(), Err(FormError::MissingFields));

        form.personal = filled_personal();
        form.personal.email = "not-an-email".into();
        assert_eq!(form.next(), Err(FormError::InvalidEmail));

        form.personal = filled_personal();
        assert_eq!(form.next(), Ok(2));
    }

    #[test]
    fn test_deposit_must_be_non_negative_number() {
        let mut account = filled_account();
        assert!(account.validate().is_ok());
        account.initial_deposit = "-1".into();
        assert_eq!(account.validate(), Err(FormError::InvalidDeposit));
        account.initial_deposit = "ten".into();
        assert_eq!(account.validate(), Err(FormError::InvalidDeposit));
        account.initial_deposit = "0".into();
        assert!(account.validate().is_ok());
    }

    #[test]
    fn test_navigation_bounds() {
        let mut form = AccountOpeningForm::new();
        assert_eq!(form.previous(), 1);
        form.personal = filled_personal();
        form.account = filled_account();
        assert_eq!(form.next(), Ok(2));
        assert_eq!(form.next(), Ok(3));
        assert!(form.is_last_step());
        assert_eq!(form.previous(), 2);
    }

    #[test]
    fn test_documents() {
        let mut form = AccountOpeningForm::new();
        assert_eq!(form.documents().len(), 2);
        assert_eq!(form.documents()[0].doc_type, "ID Proof");
        assert_eq!(form.submit(), Err(FormError::MissingDocumentFile));

        let extra = form.add_document().id.clone();
        assert_eq!(form.submit(), Err(FormError::MissingDocumentType));
        assert!(form.remove_document(&extra));
        assert_eq!(form.documents().len(), 2);

        let ids: Vec<String> = form.documents().iter().map(|d| d.id.clone()).collect();
        assert_ne!(ids[0], ids[1]);
        form.set_document_file(&ids[0], Some("passport.pdf"));
        form.set_document_file(&ids[1], Some("bill.pdf"));
        let application = form.submit().unwrap();
        assert_eq!(application.documents[0].file_name, "passport.pdf");

        form.set_document_file(&ids[1], None);
        assert_eq!(form.submit(), Err(FormError::MissingDocumentFile));
    }

    #[test]
    fn test_last_document_cannot_be_removed() {
        let mut form = AccountOpeningForm::new();
        let ids: Vec<String> = form.documents().iter().map(|d| d.id.clone()).collect();
        assert!(form.can_remove_document());
        assert!(form.remove_document(&ids[0]));
        assert!(!form.remove_document("missing"));

        assert!(!form.can_remove_document());
        assert!(!form.remove_document(&ids[1]));
        assert_eq!(form.documents().len(), 1);

        form.set_document_file(&ids[1], Some("bill.pdf"));
        let application = form.submit().unwrap();
        assert_eq!(application.documents.len(), 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::MissingFields.to_string(),
            "Please fill all required fields"
        );
        assert_eq!(
            FormError::MissingDocumentFile.to_string(),
            "Please upload all required documents"
        );
    }
}
