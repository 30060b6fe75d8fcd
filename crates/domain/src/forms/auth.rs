// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sign-in and the four-step sign-up flow.

use super::{FieldValue, Form, unknown_field};
use crate::aggregate::{ErrorEntry, ValidationErrors};
use crate::error::{DomainError, FieldError};
use crate::rules::{
    DuplicateTracker, TextRule, apply_text_rules, check_digit_code, require_choice,
    require_selection,
};
use crate::types::YesNo;
use serde::{Deserialize, Serialize};

const EMAIL_RULES: &[TextRule] = &[
    TextRule::Required("Email is required."),
    TextRule::Email("Enter a valid email address."),
];

const SIGN_IN_PASSWORD_RULES: &[TextRule] = &[
    TextRule::Required("Password is required."),
    TextRule::MinLength {
        min: 6,
        message: "Password must be at least 6 characters.",
    },
];

const SIGN_UP_PASSWORD_RULES: &[TextRule] = &[
    TextRule::Required("Password is required."),
    TextRule::MinLength {
        min: 8,
        message: "Password must be at least 8 characters.",
    },
];

const INVITE_RULES: &[TextRule] = &[TextRule::Email("Enter a valid email address.")];

/// Number of cells in the SMS confirmation code.
const SMS_CODE_LENGTH: usize = 4;

/// The sign-in form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInForm {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Keep the session after the app closes.
    pub remember_me: bool,
}

/// Errors for [`SignInForm`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInErrors {
    /// Error for `email`.
    pub email: Option<FieldError>,
    /// Error for `password`.
    pub password: Option<FieldError>,
}

impl ValidationErrors for SignInErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![
            ("email", ErrorEntry::Single(self.email.as_ref())),
            ("password", ErrorEntry::Single(self.password.as_ref())),
        ]
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            "email" => self.email = None,
            "password" => self.password = None,
            _ => {}
        }
    }
}

/// Validates the sign-in form.
#[must_use]
pub fn validate_sign_in(form: &SignInForm) -> SignInErrors {
    SignInErrors {
        email: apply_text_rules(&form.email, EMAIL_RULES),
        password: apply_text_rules(&form.password, SIGN_IN_PASSWORD_RULES),
    }
}

impl Form for SignInForm {
    type Errors = SignInErrors;
    type Context = ();

    const NAME: &'static str = "sign-in";

    fn validate(&self, _context: &()) -> SignInErrors {
        validate_sign_in(self)
    }

    fn with_edit(&self, field: &str, value: FieldValue) -> Result<Self, DomainError> {
        let mut next: Self = self.clone();
        match field {
            "email" => next.email = value.into_text(field)?,
            "password" => next.password = value.into_text(field)?,
            "rememberMe" => next.remember_me = value.into_flag(field)?,
            _ => return Err(unknown_field(Self::NAME, field)),
        }
        Ok(next)
    }
}

/// A step of the sign-up flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignUpStep {
    /// Phone, SMS code, email and password.
    #[default]
    One,
    /// Usage reason, role and onboarding preference.
    Two,
    /// Company details.
    Three,
    /// Teammate invites.
    Four,
}

impl TryFrom<u8> for SignUpStep {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            _ => Err(DomainError::UnknownValue {
                kind: "sign-up step",
                value: value.to_string(),
            }),
        }
    }
}

/// The state shared by all four sign-up steps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpForm {
    /// Phone country code (e.g. `+1`).
    pub country_code: String,
    /// Mobile number without the country code.
    pub phone_number: String,
    /// One entry per SMS code input box.
    pub sms_code: Vec<String>,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Why the user will use the service.
    pub usage_reason: Option<String>,
    /// The user's role.
    pub user_role: Option<String>,
    /// Whether the user wants onboarding.
    pub onboarding_preference: Option<YesNo>,
    /// Company name.
    pub company_name: String,
    /// Company's business direction.
    pub business_direction: Option<String>,
    /// Team size bucket.
    pub team_size: Option<String>,
    /// Teammate emails to invite. Blank rows are allowed.
    pub invites: Vec<String>,
}

/// Errors for sign-up step one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepOneErrors {
    /// Error for `countryCode`.
    pub country_code: Option<FieldError>,
    /// Error for `phoneNumber`.
    pub phone_number: Option<FieldError>,
    /// Error for `smsCode`.
    pub sms_code: Option<FieldError>,
    /// Error for `email`.
    pub email: Option<FieldError>,
    /// Error for `password`.
    pub password: Option<FieldError>,
}

impl ValidationErrors for StepOneErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![
            ("countryCode", ErrorEntry::Single(self.country_code.as_ref())),
            ("phoneNumber", ErrorEntry::Single(self.phone_number.as_ref())),
            ("smsCode", ErrorEntry::Single(self.sms_code.as_ref())),
            ("email", ErrorEntry::Single(self.email.as_ref())),
            ("password", ErrorEntry::Single(self.password.as_ref())),
        ]
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            "countryCode" => self.country_code = None,
            "phoneNumber" => self.phone_number = None,
            "smsCode" => self.sms_code = None,
            "email" => self.email = None,
            "password" => self.password = None,
            _ => {}
        }
    }
}

/// Errors for sign-up step two.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepTwoErrors {
    /// Error for `usageReason`.
    pub usage_reason: Option<FieldError>,
    /// Error for `userRole`.
    pub user_role: Option<FieldError>,
    /// Error for `onboardingPreference`.
    pub onboarding_preference: Option<FieldError>,
}

impl ValidationErrors for StepTwoErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![
            ("usageReason", ErrorEntry::Single(self.usage_reason.as_ref())),
            ("userRole", ErrorEntry::Single(self.user_role.as_ref())),
            (
                "onboardingPreference",
                ErrorEntry::Single(self.onboarding_preference.as_ref()),
            ),
        ]
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            "usageReason" => self.usage_reason = None,
            "userRole" => self.user_role = None,
            "onboardingPreference" => self.onboarding_preference = None,
            _ => {}
        }
    }
}

/// Errors for sign-up step three.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepThreeErrors {
    /// Error for `companyName`.
    pub company_name: Option<FieldError>,
    /// Error for `businessDirection`.
    pub business_direction: Option<FieldError>,
    /// Error for `teamSize`.
    pub team_size: Option<FieldError>,
}

impl ValidationErrors for StepThreeErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![
            ("companyName", ErrorEntry::Single(self.company_name.as_ref())),
            (
                "businessDirection",
                ErrorEntry::Single(self.business_direction.as_ref()),
            ),
            ("teamSize", ErrorEntry::Single(self.team_size.as_ref())),
        ]
    }

    fn clear_field(&mut self, field: &str) {
        match field {
            "companyName" => self.company_name = None,
            "businessDirection" => self.business_direction = None,
            "teamSize" => self.team_size = None,
            _ => {}
        }
    }
}

/// Errors for sign-up step four, index-aligned with the invite list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepFourErrors {
    /// One slot per invite row.
    pub invites: Vec<Option<FieldError>>,
}

impl ValidationErrors for StepFourErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        vec![("invites", ErrorEntry::Repeated(&self.invites))]
    }

    fn clear_field(&mut self, field: &str) {
        if field == "invites" {
            self.invites.iter_mut().for_each(|slot| *slot = None);
        }
    }
}

/// Validates sign-up step one.
#[must_use]
pub fn validate_step_one(form: &SignUpForm) -> StepOneErrors {
    StepOneErrors {
        country_code: apply_text_rules(
            &form.country_code,
            &[TextRule::Required("Country code is required.")],
        ),
        phone_number: apply_text_rules(
            &form.phone_number,
            &[TextRule::Required("Mobile number is required.")],
        ),
        sms_code: check_digit_code(
            &form.sms_code,
            SMS_CODE_LENGTH,
            "SMS code must be 4 digits.",
        ),
        email: apply_text_rules(&form.email, EMAIL_RULES),
        password: apply_text_rules(&form.password, SIGN_UP_PASSWORD_RULES),
    }
}

/// Validates sign-up step two.
#[must_use]
pub fn validate_step_two(form: &SignUpForm) -> StepTwoErrors {
    StepTwoErrors {
        usage_reason: require_choice(
            form.usage_reason.as_deref(),
            "Please select why you will use the service.",
        ),
        user_role: require_choice(form.user_role.as_deref(), "Please select your role."),
        onboarding_preference: require_selection(
            form.onboarding_preference.as_ref(),
            "Please choose Yes or No.",
        ),
    }
}

/// Validates sign-up step three.
#[must_use]
pub fn validate_step_three(form: &SignUpForm) -> StepThreeErrors {
    StepThreeErrors {
        company_name: apply_text_rules(
            &form.company_name,
            &[TextRule::Required("Company name is required.")],
        ),
        business_direction: require_choice(
            form.business_direction.as_deref(),
            "Please select a business direction.",
        ),
        team_size: require_choice(form.team_size.as_deref(), "Please select team size."),
    }
}

/// Validates sign-up step four.
///
/// Blank rows are skipped. Other rows must be valid email addresses, and a
/// row repeating an earlier address (ignoring case and surrounding spaces)
/// is flagged as a duplicate.
#[must_use]
pub fn validate_step_four(form: &SignUpForm) -> StepFourErrors {
    let mut seen: DuplicateTracker = DuplicateTracker::new();
    let invites: Vec<Option<FieldError>> = form
        .invites
        .iter()
        .map(|invite| {
            if invite.trim().is_empty() {
                return None;
            }
            apply_text_rules(invite, INVITE_RULES)
                .or_else(|| seen.check(invite, "This email is already invited."))
        })
        .collect();

    StepFourErrors { invites }
}

/// Errors for whichever sign-up step was validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SignUpErrors {
    /// Step one errors.
    One(StepOneErrors),
    /// Step two errors.
    Two(StepTwoErrors),
    /// Step three errors.
    Three(StepThreeErrors),
    /// Step four errors.
    Four(StepFourErrors),
}

impl Default for SignUpErrors {
    fn default() -> Self {
        Self::One(StepOneErrors::default())
    }
}

impl ValidationErrors for SignUpErrors {
    fn entries(&self) -> Vec<(&'static str, ErrorEntry<'_>)> {
        match self {
            Self::One(errors) => errors.entries(),
            Self::Two(errors) => errors.entries(),
            Self::Three(errors) => errors.entries(),
            Self::Four(errors) => errors.entries(),
        }
    }

    fn clear_field(&mut self, field: &str) {
        match self {
            Self::One(errors) => errors.clear_field(field),
            Self::Two(errors) => errors.clear_field(field),
            Self::Three(errors) => errors.clear_field(field),
            Self::Four(errors) => errors.clear_field(field),
        }
    }
}

impl Form for SignUpForm {
    type Errors = SignUpErrors;
    type Context = SignUpStep;

    const NAME: &'static str = "sign-up";

    fn validate(&self, step: &SignUpStep) -> SignUpErrors {
        match step {
            SignUpStep::One => SignUpErrors::One(validate_step_one(self)),
            SignUpStep::Two => SignUpErrors::Two(validate_step_two(self)),
            SignUpStep::Three => SignUpErrors::Three(validate_step_three(self)),
            SignUpStep::Four => SignUpErrors::Four(validate_step_four(self)),
        }
    }

    fn with_edit(&self, field: &str, value: FieldValue) -> Result<Self, DomainError> {
        let mut next: Self = self.clone();
        match field {
            "countryCode" => next.country_code = value.into_text(field)?,
            "phoneNumber" => next.phone_number = value.into_text(field)?,
            "smsCode" => next.sms_code = value.into_list(field)?,
            "email" => next.email = value.into_text(field)?,
            "password" => next.password = value.into_text(field)?,
            "usageReason" => next.usage_reason = value.into_choice(field)?,
            "userRole" => next.user_role = value.into_choice(field)?,
            "onboardingPreference" => next.onboarding_preference = value.into_parsed(field)?,
            "companyName" => next.company_name = value.into_text(field)?,
            "businessDirection" => next.business_direction = value.into_choice(field)?,
            "teamSize" => next.team_size = value.into_choice(field)?,
            "invites" => next.invites = value.into_list(field)?,
            _ => return Err(unknown_field(Self::NAME, field)),
        }
        Ok(next)
    }
}
