//! Structural capability classification.
//!
//! Sequence patterns only match sequence-like subjects, and text types are
//! never sequence-like even though they are sequences. Mapping patterns
//! only match mapping-like subjects. Supertypes of the abstract containers
//! (`object`, `Any`) can still match, since some of their values are
//! sequences or mappings.

use sift_types::{ClassId, Idx, Pool, TypeData, Variance};

/// `str`, `bytes`, `bytearray` and their subtypes (literals included).
pub fn is_text_type(pool: &mut Pool, ty: Idx) -> bool {
    if ty.is_any() || ty.is_never() {
        return false;
    }
    [Idx::STR, Idx::BYTES, Idx::BYTEARRAY]
        .into_iter()
        .any(|text| pool.is_subtype(ty, text))
}

/// A subtype of `Sequence[Any]` that is not a text type.
pub fn is_sequence_like(pool: &mut Pool, ty: Idx) -> bool {
    if ty.is_any() {
        return true;
    }
    if ty.is_never() || is_text_type(pool, ty) {
        return false;
    }
    let sequence = pool.any_instance(ClassId::SEQUENCE);
    pool.is_subtype(ty, sequence)
}

/// Sequence-like, or a supertype of `Sequence` such as `object`.
pub fn can_match_sequence(pool: &mut Pool, ty: Idx) -> bool {
    if is_sequence_like(pool, ty) {
        return true;
    }
    if ty.is_never() {
        return false;
    }
    let sequence = pool.any_instance(ClassId::SEQUENCE);
    pool.is_subtype(sequence, ty)
}

/// A subtype of `Mapping[Any, Any]`, or a TypedDict.
pub fn is_mapping_like(pool: &mut Pool, ty: Idx) -> bool {
    if ty.is_any() {
        return true;
    }
    match pool.data(ty) {
        TypeData::Never => false,
        TypeData::TypedDict(_) => true,
        _ => {
            let mapping = pool.any_instance(ClassId::MAPPING);
            pool.is_subtype(ty, mapping)
        }
    }
}

/// Mapping-like, or a supertype of `Mapping` such as `object`.
pub fn can_match_mapping(pool: &mut Pool, ty: Idx) -> bool {
    if is_mapping_like(pool, ty) {
        return true;
    }
    if ty.is_never() {
        return false;
    }
    let mapping = pool.any_instance(ClassId::MAPPING);
    pool.is_subtype(mapping, ty)
}

/// Whether a homogeneous container may be rewritten with a narrower element
/// type after a sequence pattern matched.
///
/// Allowed for tuples, for supertypes of `Sequence`, and for generic classes
/// whose only type parameter is covariant and is the `Sequence` element
/// type. `list[object]` therefore stays `list[object]`.
pub fn inner_narrowing_allowed(pool: &mut Pool, ty: Idx) -> bool {
    let class = match pool.data(ty) {
        TypeData::Any | TypeData::Tuple(_) => return true,
        TypeData::Instance { class, .. } => *class,
        _ => return false,
    };
    if class == ClassId::OBJECT || class == ClassId::TUPLE {
        return true;
    }
    let def = pool.classes().get(class);
    let [param] = def.type_params.as_slice() else {
        return false;
    };
    if param.variance != Variance::Covariant {
        return false;
    }
    let own = pool.self_instance(class);
    let param_var = pool.type_var(class, 0);
    pool.map_to_supertype(own, ClassId::SEQUENCE)
        .is_some_and(|args| args.as_slice() == [param_var])
}

#[cfg(test)]
mod tests;
