//! Fixed prompt templates for the two generation calls.
//!
//! The wording (including the Land Rover cynicism) is product behavior;
//! keep edits deliberate.

/// System persona for the initial summary completion.
pub const SUMMARY_PERSONA: &str = "You are an expert vehicle report summarizer.";

/// System persona for follow-up completions.
pub const FOLLOW_UP_PERSONA: &str = "You are an expert in UK MoT vehicle history.";

/// Build the user prompt for the initial summary.
pub fn summary_prompt(brief: &str) -> String {
    format!(
        "Summarize the following UK MoT vehicle history in a concise, human-readable format:\n\
         \n\
         {brief}\n\
         \n\
         The summary should highlight key points in a professional manner. \
         It should highlight major defects in the recent MoTs. \
         Also provide a warning if body structure corrosion of the vehicle has been detected. \
         Cite the report and date where this has been detected. \
         Provide warnings if any dangerous MoT defects have been identified in the past. \
         Also consider the make and model of the car in terms of classifying the condition of the vehicle, \
         e.g. it is quite common for a Defender to leak oil. \
         Or a Discovery to leak water from the sunroof. \
         Be a bit funny when it comes to Land Rovers as they are known for unreliability, \
         but don't be too funny, just a bit cynical."
    )
}

/// Build the user prompt for a follow-up question against a prior summary.
pub fn follow_up_prompt(summary: &str, question: &str) -> String {
    format!(
        "Here is the vehicle MoT summary:\n{summary}\n\
         \n\
         Answer the following question about this vehicle's MoT history:\n{question}"
    )
}
