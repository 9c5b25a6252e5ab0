use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Width of the `name` column.
pub const NAME_MAX_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("name must be at most {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() {
        return Err(errors::ModelError::Validation("price must be a finite number".into()));
    }
    Ok(())
}

/// All products, ascending by id.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Insert a new row; the database assigns the id.
pub async fn insert(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    description: Option<&str>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        price: Set(price),
        description: Set(description.map(str::to_string)),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite the mutable fields of an existing row. Never inserts.
pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    price: f64,
    description: Option<&str>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Unchanged(id),
        name: Set(name.to_string()),
        price: Set(price),
        description: Set(description.map(str::to_string)),
    };
    match am.update(db).await {
        Ok(m) => Ok(m),
        Err(DbErr::RecordNotUpdated) => Err(errors::ModelError::NotFound(format!("product {id} not found"))),
        Err(e) => Err(e.into()),
    }
}

/// Delete by id; returns true if a row was removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Product 1").is_ok());
    }

    #[test]
    fn name_length_is_bounded_by_column() {
        assert!(validate_name(&"a".repeat(NAME_MAX_LEN)).is_ok());
        assert!(validate_name(&"a".repeat(NAME_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn non_finite_price_is_rejected() {
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(999.0).is_ok());
    }
}
