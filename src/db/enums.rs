use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text", enum_name = "os_type_enum")]
pub enum OsType {
    #[sea_orm(string_value = "mac")]
    Mac,
    #[sea_orm(string_value = "windows")]
    Windows,
    #[sea_orm(string_value = "linux")]
    Linux,
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
