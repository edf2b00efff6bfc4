mod support;
mod gemini_provider;
mod end_to_end;
