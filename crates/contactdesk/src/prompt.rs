//! Prompt templates for the summary and reply completions.

use crate::submission::Submission;

const SUMMARY_INSTRUCTIONS: &str =
    "Summarize the customer message in 2-3 bullet points. Use simple, business-friendly language.";

const REPLY_INSTRUCTIONS: &str = "Write a short, professional reply in a friendly tone. Keep it under 6 sentences, and include a clear next step.";

pub fn summary_prompt(submission: &Submission) -> String {
    with_customer_details(SUMMARY_INSTRUCTIONS, submission)
}

pub fn reply_prompt(submission: &Submission) -> String {
    with_customer_details(REPLY_INSTRUCTIONS, submission)
}

fn with_customer_details(instructions: &str, submission: &Submission) -> String {
    format!(
        "{instructions}\n\nCustomer name: {}\nCustomer email: {}\nMessage: {}",
        submission.name, submission.email, submission.message
    )
}
