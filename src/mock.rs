//! Rule-based replies for mock mode.
//!
//! Mock mode answers without any network call: the user's message is
//! matched case-insensitively against a fixed, ordered list of keyword
//! groups, and each group maps to a fixed four-step reply. The lookup is
//! pure and deterministic.

use crate::observability;

/// The kind of guidance a message asks for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Bank messages, OTPs, and payment safety.
    Financial,

    /// Doctor visits and hospital bookings.
    Health,

    /// Paper forms and official documents.
    Paperwork,

    /// Phones and apps.
    Phone,

    /// Emotional reassurance.
    Reassurance,

    /// Anything the other groups do not cover.
    General,
}

/// Keyword groups in priority order. Only the first matching group is
/// used, so a message naming both money and a hospital gets the financial
/// reply. The groups, their keywords, and the ordering are fixed.
const KEYWORD_GROUPS: &[(Category, &[&str])] = &[
    (Category::Financial, &["bank", "money", "otp"]),
    (Category::Health, &["doctor", "hospital", "health"]),
    (Category::Paperwork, &["form", "application", "document"]),
    (Category::Phone, &["mobile", "phone", "app", "whatsapp"]),
    (
        Category::Reassurance,
        &["scared", "tension", "stress", "worried"],
    ),
];

const FINANCIAL_REPLY: &str = "Step 1: Do not share your OTP, PIN or password with anyone.\n\
    Step 2: Read the message to me slowly, line by line.\n\
    Step 3: I will tell you if it looks safe or like a scam.\n\
    Step 4: If you are unsure, call the official bank number printed on your card or passbook.";

const HEALTH_REPLY: &str = "Step 1: Tell me the name of the hospital or clinic.\n\
    Step 2: I will explain how to book the appointment in simple steps.\n\
    Step 3: Keep your ID card and any reports ready before you visit.\n\
    Step 4: If you feel very sick, go to the nearest clinic or hospital immediately.";

const PAPERWORK_REPLY: &str = "Step 1: Keep the form or document in your hand.\n\
    Step 2: Read or show me one line at a time.\n\
    Step 3: I will tell you in simple words what each part means.\n\
    Step 4: We will finish the form slowly, step by step, without hurry.";

const PHONE_REPLY: &str = "Step 1: Tell me what you see on your phone screen right now.\n\
    Step 2: I will tell you which button to tap first.\n\
    Step 3: We will move one step at a time.\n\
    Step 4: If you feel confused, stop and ask me again. It is okay.";

const REASSURANCE_REPLY: &str = "Step 1: Take a slow, deep breath.\n\
    Step 2: You are not alone. I am here to guide you.\n\
    Step 3: Tell me what is worrying you in one or two simple lines.\n\
    Step 4: We will handle it together, step by step.";

const GENERAL_REPLY: &str = "Step 1: Tell me clearly what you need help with.\n\
    Step 2: I will explain it in very simple words.\n\
    Step 3: If it is a digital task, I will guide you button by button.\n\
    Step 4: If you do not understand, you can ask me the same thing again.";

/// Classify a message into the first keyword group it matches.
///
/// Matching is case-insensitive substring containment. Messages matching
/// no group classify as [`Category::General`].
pub fn categorize(message: &str) -> Category {
    let probe = message.to_lowercase();
    for (category, keywords) in KEYWORD_GROUPS {
        if keywords.iter().any(|keyword| probe.contains(keyword)) {
            return *category;
        }
    }
    Category::General
}

/// Returns the fixed four-step reply for a category.
pub fn reply_for(category: Category) -> &'static str {
    match category {
        Category::Financial => FINANCIAL_REPLY,
        Category::Health => HEALTH_REPLY,
        Category::Paperwork => PAPERWORK_REPLY,
        Category::Phone => PHONE_REPLY,
        Category::Reassurance => REASSURANCE_REPLY,
        Category::General => GENERAL_REPLY,
    }
}

/// Produce the mock reply for a message.
pub fn mock_reply(message: &str) -> &'static str {
    observability::MOCK_REPLIES.click();
    reply_for(categorize(message))
}
