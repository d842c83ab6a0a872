use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct KeyValueEntity {
    pub key: String,
    pub value: String,
}

impl KeyValueEntity {
    pub fn into_value(self) -> String {
        self.value
    }
}
