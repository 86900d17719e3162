use naia_serde::{BitReader, BitWrite};

use crate::{NetRole, Replicant, ReplicantError};

pub type FieldIndex = u8;

/// One entry of a replicant's declared field set: the field, and whether the
/// receiving side is notified after it changes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplicatedField {
    index: FieldIndex,
    name: &'static str,
    notify: bool,
}

impl ReplicatedField {
    /// A field whose change calls `Replicant::on_rep` on receivers
    pub const fn notify(index: FieldIndex, name: &'static str) -> Self {
        Self {
            index,
            name,
            notify: true,
        }
    }

    /// A field that's replicated without any notification
    pub const fn silent(index: FieldIndex, name: &'static str) -> Self {
        Self {
            index,
            name,
            notify: false,
        }
    }

    pub fn index(&self) -> FieldIndex {
        self.index
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn has_notify(&self) -> bool {
        self.notify
    }
}

/// Every replicant replicates its owner first
pub const OWNER_FIELD: ReplicatedField = ReplicatedField::notify(0, "owner");

/// The field set of a replicant that declares nothing of its own
pub const BASE_FIELDS: &[ReplicatedField] = &[OWNER_FIELD];

fn declared_field(node: &dyn Replicant, index: FieldIndex) -> Result<ReplicatedField, ReplicantError> {
    node.declared_fields()
        .iter()
        .find(|field| field.index() == index)
        .copied()
        .ok_or_else(|| ReplicantError::UnknownField {
            name: node.replicant().name().to_string(),
            index,
        })
}

/// Writes every declared field, in declaration order
pub fn write_declared_fields(
    node: &dyn Replicant,
    writer: &mut dyn BitWrite,
) -> Result<(), ReplicantError> {
    for field in node.declared_fields() {
        node.write_field(field.index(), writer)?;
    }
    Ok(())
}

/// Applies one incoming field update, then runs the field's notification.
/// `owner_role` is the local role of the replicant's Root; the authority never
/// accepts network updates.
pub fn receive_field(
    node: &mut dyn Replicant,
    owner_role: NetRole,
    index: FieldIndex,
    reader: &mut BitReader,
) -> Result<(), ReplicantError> {
    let field = declared_field(&*node, index)?;

    if owner_role.is_authority() {
        return Err(ReplicantError::ReceiveOnAuthority {
            name: node.replicant().name().to_string(),
            index,
        });
    }

    node.read_field(index, reader)?;

    if field.has_notify() {
        node.on_rep(index);
    }

    Ok(())
}

/// Reads every declared field in declaration order, the mirror of
/// `write_declared_fields`
pub fn receive_declared_fields(
    node: &mut dyn Replicant,
    owner_role: NetRole,
    reader: &mut BitReader,
) -> Result<(), ReplicantError> {
    let fields = node.declared_fields();
    for field in fields {
        receive_field(node, owner_role, field.index(), reader)?;
    }
    Ok(())
}
