//! Boilerplate for row records.
//!
//! **`impl_row_record!`** generates the [`RowRecord`](super::RowRecord)
//! implementation of a row struct from the list of its payload keys:
//!
//! ```ignore
//! impl_row_record!(
//!     VirtualMachine,
//!     text { "nom" => name, "os" => os },
//!     count { "cpu" => cpu, "ram" => ram }
//! );
//! ```
//!
//! `text` fields take any value as text, `count` fields parse a
//! non-negative integer, `yes_no` fields parse an `Oui`/`Non` answer.

#[macro_export]
macro_rules! impl_row_record {
    (
        $row:ty,
        text { $($text_key:literal => $text_field:ident),* $(,)? }
        $(, count { $($count_key:literal => $count_field:ident),* $(,)? })?
        $(, yes_no { $($flag_key:literal => $flag_field:ident),* $(,)? })?
    ) => {
        impl $crate::domain::draft::RowRecord for $row {
            fn set_field(
                &mut self,
                field: &str,
                value: $crate::domain::draft::FieldValue,
            ) -> $crate::domain::draft::FieldWrite {
                use $crate::domain::draft::FieldWrite;

                match field {
                    $(
                        $text_key => {
                            self.$text_field = value.into_text();
                            FieldWrite::Written
                        }
                    )*
                    $($(
                        $count_key => match value.as_count() {
                            Some(n) => {
                                self.$count_field = n;
                                FieldWrite::Written
                            }
                            None => FieldWrite::Rejected,
                        },
                    )*)?
                    $($(
                        $flag_key => match value.as_yes_no() {
                            Some(answer) => {
                                self.$flag_field = answer;
                                FieldWrite::Written
                            }
                            None => FieldWrite::Rejected,
                        },
                    )*)?
                    _ => FieldWrite::UnknownField,
                }
            }
        }
    };
}
