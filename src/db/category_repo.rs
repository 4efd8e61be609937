use rusqlite::{params, Connection};

use crate::error::TaskflowError;
use crate::models::Category;

pub fn insert_category(conn: &Connection, category: &Category) -> Result<(), TaskflowError> {
    conn.execute(
        "INSERT INTO categories (id, name, color) VALUES (?1, ?2, ?3)",
        params![category.id, category.name, category.color],
    )?;
    Ok(())
}

pub fn get_category_by_id(conn: &Connection, id: &str) -> Result<Category, TaskflowError> {
    conn.query_row(
        "SELECT id, name, color FROM categories WHERE id = ?1",
        params![id],
        |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
                color: row.get(2)?,
            })
        },
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => TaskflowError::category_not_found(id),
        _ => TaskflowError::from(e),
    })
}

pub fn list_categories(conn: &Connection) -> Result<Vec<Category>, TaskflowError> {
    let mut stmt = conn.prepare("SELECT id, name, color FROM categories ORDER BY rowid ASC")?;
    let categories = stmt
        .query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
                color: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(categories)
}

pub fn save_category(conn: &Connection, category: &Category) -> Result<(), TaskflowError> {
    let changed = conn.execute(
        "UPDATE categories SET name = ?1, color = ?2 WHERE id = ?3",
        params![category.name, category.color, category.id],
    )?;
    if changed == 0 {
        return Err(TaskflowError::category_not_found(&category.id));
    }
    Ok(())
}

/// Tasks referencing the category are left untouched.
pub fn delete_category(conn: &Connection, id: &str) -> Result<(), TaskflowError> {
    let changed = conn.execute("DELETE FROM categories WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(TaskflowError::category_not_found(id));
    }
    Ok(())
}
