use crate::builder::CodeBuilder;

/// A `oneof` field: a discriminated union where one alternative is active.
///
/// Oneof fields have no accessor; each alternative is exposed through its
/// own field. This descriptor only seeds test fixtures and delegates
/// deep-copy to a hand-written dispatch routine that switches on the
/// discriminant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneofField {
    pub(crate) copy_func_name: String,
    pub(crate) origin_field_name: String,
    pub(crate) test_val: String,
    pub(crate) fill_test_name: String,
}

impl OneofField {
    pub fn new(
        copy_func_name: impl Into<String>,
        origin_field_name: impl Into<String>,
        test_val: impl Into<String>,
        fill_test_name: impl Into<String>,
    ) -> Self {
        Self {
            copy_func_name: copy_func_name.into(),
            origin_field_name: origin_field_name.into(),
            test_val: test_val.into(),
            fill_test_name: fill_test_name.into(),
        }
    }

    pub fn generate_set_with_test_value(&self, out: &mut CodeBuilder) {
        out.push_line(&format!(
            "(*tv.orig).{} = {}",
            self.origin_field_name, self.test_val
        ));
        out.push_line(&format!("tv.{}().InitEmpty()", self.fill_test_name));
        out.push_line(&format!(
            "fillTest{0}(tv.{0}())",
            self.fill_test_name
        ));
    }

    pub fn generate_copy_to_value(&self, out: &mut CodeBuilder) {
        out.push_line(&format!(
            "{}((*ms.orig), (*dest.orig))",
            self.copy_func_name
        ));
    }
}
