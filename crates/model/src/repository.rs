//! # Record Repository
//!
//! Persists party members and authorities through Sea-ORM. Identifiers are
//! always assigned by the database; callers hand in records without an id and
//! get them back with one.
//!
//! No membership rules live here: a party may have several leaders and a
//! member may hold the same authority name twice.

use std::{collections::HashMap, time::Instant};

use entity::{authorities, members, party_members, Authorities, Members, Parties, PartyMembers};
use error::{AppError, Result, ResultExt};
use logging::{log_db_query, measure_duration};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::Unchanged,
    ColumnTrait,
    DatabaseConnection,
    EntityTrait,
    ModelTrait,
    QueryFilter,
    QueryOrder,
    Set,
};
use tracing::{debug, info};

use crate::{authority::Authority, party_member::PartyMember};

/// Insert a new party membership
///
/// # Errors
///
/// `Conflict` if the record already carries an id, `Validation` if its party
/// or member is missing, `Database` for storage failures such as a foreign key
/// pointing at a missing row.
pub async fn insert_party_member(db: &DatabaseConnection, record: &PartyMember) -> Result<PartyMember> {
    if let Some(id) = record.id() {
        return Err(AppError::conflict(format!(
            "Party member {} is already persisted",
            id
        )));
    }

    let active = record.to_active_model()?;
    let start = Instant::now();
    let row = active
        .insert(db)
        .await
        .context("Failed to insert party member")
        .log_error()?;
    log_db_query!("insert", "party_member", start.elapsed().as_millis());

    info!(
        party_member_id = row.id,
        party_id = row.party_id,
        member_id = row.member_id,
        "Party member created"
    );

    let mut created = record.clone();
    created.set_id(Some(row.id));
    Ok(created)
}

/// Load a party membership with its party and member
pub async fn find_party_member(db: &DatabaseConnection, id: i64) -> Result<Option<PartyMember>> {
    measure_duration!("database", "find party_member", {
        let Some(row) = PartyMembers::find_by_id(id).one(db).await?
        else {
            debug!(party_member_id = id, "Party member not found");
            return Ok(None);
        };

        let party = row
            .find_related(Parties)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Party {}", row.party_id)))?;
        let member = row
            .find_related(Members)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Member {}", row.member_id)))?;

        Ok(Some(PartyMember::from_parts(row, party, member)))
    })
}

/// List every membership row of a party, ordered by id
///
/// # Errors
///
/// `NotFound` when the party itself does not exist.
pub async fn party_members_of_party(db: &DatabaseConnection, party_id: i64) -> Result<Vec<PartyMember>> {
    measure_duration!("database", "list party_member", {
        let party = Parties::find_by_id(party_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Party {}", party_id)))?;

        let rows = PartyMembers::find()
            .filter(party_members::Column::PartyId.eq(party_id))
            .order_by_asc(party_members::Column::Id)
            .all(db)
            .await?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let member_ids: Vec<i64> = rows.iter().map(|row| row.member_id).collect();
        let members_by_id: HashMap<i64, members::Model> = Members::find()
            .filter(members::Column::Id.is_in(member_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|member| (member.id, member))
            .collect();

        rows.into_iter()
            .map(|row| {
                let member = members_by_id
                    .get(&row.member_id)
                    .cloned()
                    .ok_or_else(|| AppError::not_found(format!("Member {}", row.member_id)))?;
                Ok(PartyMember::from_parts(row, party.clone(), member))
            })
            .collect()
    })
}

/// Persist the references and flags of a stored party membership
///
/// # Errors
///
/// `Validation` if the record was never stored, `NotFound` if its row is gone.
pub async fn update_party_member(db: &DatabaseConnection, record: &PartyMember) -> Result<PartyMember> {
    let id = record
        .id()
        .ok_or_else(|| AppError::validation("party member has not been persisted"))?;

    let mut active = record.to_active_model()?;
    active.id = Unchanged(id);

    let start = Instant::now();
    let row = active
        .update(db)
        .await
        .context(format!("Failed to update party member {}", id))
        .log_error()?;
    log_db_query!("update", "party_member", start.elapsed().as_millis());

    info!(
        party_member_id = row.id,
        is_party_leader = row.is_party_leader,
        is_special_user = row.is_special_user,
        "Party member updated"
    );
    Ok(record.clone())
}

/// Delete a party membership. Returns whether a row was removed.
pub async fn delete_party_member(db: &DatabaseConnection, id: i64) -> Result<bool> {
    let start = Instant::now();
    let result = PartyMembers::delete_by_id(id).exec(db).await?;
    log_db_query!("delete", "party_member", start.elapsed().as_millis());

    let deleted = result.rows_affected > 0;
    if deleted {
        info!(party_member_id = id, "Party member deleted");
    }
    Ok(deleted)
}

/// Insert a new authority
///
/// The returned authority keeps the caller's member handle, so an already
/// loaded member stays loaded.
///
/// # Errors
///
/// `Conflict` if the authority already carries an id.
pub async fn insert_authority(db: &DatabaseConnection, authority: &Authority) -> Result<Authority> {
    if let Some(id) = authority.id() {
        return Err(AppError::conflict(format!(
            "Authority {} is already persisted",
            id
        )));
    }

    let start = Instant::now();
    let row = authority
        .to_active_model()
        .insert(db)
        .await
        .context("Failed to insert authority")
        .log_error()?;
    log_db_query!("insert", "authority", start.elapsed().as_millis());

    info!(
        authority_id = row.id,
        name = row.name.as_deref().unwrap_or_default(),
        member_id = ?row.member_id,
        "Authority granted"
    );
    Ok(Authority::new(Some(row.id), row.name, authority.user().clone()))
}

/// Load an authority. Its member is left unresolved.
pub async fn find_authority(db: &DatabaseConnection, id: i64) -> Result<Option<Authority>> {
    let start = Instant::now();
    let row = Authorities::find_by_id(id).one(db).await?;
    log_db_query!("select", "authority", start.elapsed().as_millis());
    Ok(row.map(Authority::from))
}

/// List the authorities granted to a member, ordered by id
pub async fn authorities_of_member(db: &DatabaseConnection, member_id: i64) -> Result<Vec<Authority>> {
    let start = Instant::now();
    let rows = Authorities::find()
        .filter(authorities::Column::MemberId.eq(member_id))
        .order_by_asc(authorities::Column::Id)
        .all(db)
        .await?;
    log_db_query!("select", "authority", start.elapsed().as_millis());
    Ok(rows.into_iter().map(Authority::from).collect())
}

/// Persist the member of a stored authority after [`Authority::set_user`]
///
/// Only the member column is written.
///
/// # Errors
///
/// `Validation` if the authority was never stored, `NotFound` if its row is gone.
pub async fn save_authority_user(db: &DatabaseConnection, authority: &Authority) -> Result<Authority> {
    let id = authority
        .id()
        .ok_or_else(|| AppError::validation("authority has not been persisted"))?;

    let active = authorities::ActiveModel {
        id: Unchanged(id),
        member_id: Set(authority.user().id()),
        ..Default::default()
    };

    let start = Instant::now();
    let row = active
        .update(db)
        .await
        .context(format!("Failed to reassign authority {}", id))
        .log_error()?;
    log_db_query!("update", "authority", start.elapsed().as_millis());

    info!(authority_id = row.id, member_id = ?row.member_id, "Authority reassigned");
    Ok(Authority::new(Some(row.id), row.name, authority.user().clone()))
}
