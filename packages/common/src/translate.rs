/// String translation abstraction; the host localization layer provides the
/// real one. `args` fills `{placeholder}` tokens in the translated text.
pub trait Translator {
    fn translate(&self, text: &str, args: &[(&str, &str)]) -> String;
}

/// No localization: returns the text as-is with placeholders substituted.
/// Values are inserted verbatim; escaping belongs to the render boundary.
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&self, text: &str, args: &[(&str, &str)]) -> String {
        let mut out = text.to_string();
        for (key, value) in args {
            out = out.replace(&format!("{{{}}}", key), value);
        }
        out
    }
}

/// Mock translator for testing: wraps every translated string in markers so
/// tests can assert that a message actually went through the seam.
pub struct MarkingTranslator;

impl Translator for MarkingTranslator {
    fn translate(&self, text: &str, args: &[(&str, &str)]) -> String {
        format!("[{}]", PassthroughTranslator.translate(text, args))
    }
}
