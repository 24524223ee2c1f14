//! Column descriptor → T-SQL column type.

use crate::schema::{ColumnDescriptor, DataType};

/// Largest bounded `nvarchar(n)`; anything larger (or unsized) is `nvarchar(MAX)`.
pub const MAX_NVARCHAR_SIZE: u32 = 4000;

/// Map a column to its SQL Server type.
///
/// Total: every descriptor yields a type string. `indexed_string_size` is the size
/// given to key/indexed string columns declared without one.
pub fn data_type_of(field: &ColumnDescriptor, indexed_string_size: u32) -> String {
    match &field.data_type {
        DataType::Bool => "bit".to_string(),
        DataType::Int | DataType::Uint => {
            let sql_type = match field.size {
                s if s < 16 => "smallint",
                s if s < 31 => "int",
                _ => "bigint",
            };
            if field.auto_increment {
                format!("{sql_type} IDENTITY(1,1)")
            } else {
                sql_type.to_string()
            }
        }
        DataType::Float => "float".to_string(),
        DataType::String => {
            let mut size = field.size;
            if size == 0 && (field.primary_key || field.has_index()) {
                size = indexed_string_size;
            }
            if size > 0 && size <= MAX_NVARCHAR_SIZE {
                format!("nvarchar({size})")
            } else {
                "nvarchar(MAX)".to_string()
            }
        }
        DataType::Time => "datetimeoffset".to_string(),
        DataType::Bytes => "varbinary(MAX)".to_string(),
        DataType::Custom(name) => name.clone(),
    }
}
