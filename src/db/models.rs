use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// One row of the `users` table, kept in the column order SQLite reported.
///
/// The schema is owned by whoever maintains the database, so columns are not
/// known ahead of time. Values are mapped by their storage class:
/// - NULL -> `null`
/// - INTEGER -> number
/// - REAL -> number (`null` if not finite)
/// - TEXT -> string
/// - BLOB -> base64 string
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserRecord {
    columns: Vec<(String, Value)>,
}

impl UserRecord {
    pub fn columns(&self) -> &[(String, Value)] {
        &self.columns
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    pub fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let columns = row
            .columns()
            .iter()
            .map(|column| {
                let value = column_value(row, column.ordinal())?;
                Ok((column.name().to_string(), value))
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;
        Ok(Self { columns })
    }
}

impl From<Vec<(String, Value)>> for UserRecord {
    fn from(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }
}

impl Serialize for UserRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn column_value(row: &SqliteRow, idx: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let storage_class = raw.type_info().name().to_string();

    let value = match storage_class.as_str() {
        "INTEGER" => Value::from(row.try_get_unchecked::<i64, _>(idx)?),
        "REAL" => Number::from_f64(row.try_get_unchecked::<f64, _>(idx)?)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "BLOB" => Value::String(BASE64_STANDARD.encode(row.try_get_unchecked::<Vec<u8>, _>(idx)?)),
        _ => Value::String(row.try_get_unchecked::<String, _>(idx)?),
    };
    Ok(value)
}
