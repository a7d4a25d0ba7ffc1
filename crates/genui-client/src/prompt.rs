//! Instruction text sent to the model

use genui_core::GenerationRequest;

/// Build the instruction for a request
///
/// The prompt text is embedded verbatim; the framework is embedded by its
/// wire value (`html-tailwind`, ...).
pub fn build_instruction(request: &GenerationRequest) -> String {
    format!(
        "You are an experienced programmer with expertise in web development and UI/UX design.\n\
         Now, generate a UI component for: {}\n\
         Framework to use: {}\n\
         \n\
         Requirements:\n\
         - Return ONLY the code, formatted in Markdown fenced code blocks.\n\
         - Provide the whole code as a single HTML file.",
        request.prompt_text, request.framework
    )
}
