/// A compact, single-line form of a value for log lines.
pub trait ShortForm {
    fn short_form(&self) -> String;
}
