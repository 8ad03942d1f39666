//! The builtin class prelude every pool starts with.

use crate::{ClassDef, ClassFlags, ClassId, Idx, Pool, Variance};

const SOLID: ClassFlags = ClassFlags::DISJOINT_BASE;
const SEALED: ClassFlags = ClassFlags::DISJOINT_BASE.union(ClassFlags::FINAL);

/// Register the builtin classes at their fixed `ClassId`s.
pub(crate) fn register_builtins(pool: &mut Pool) {
    use Variance::{Covariant, Invariant};
    let none = ClassFlags::empty();

    define(pool, ClassId::OBJECT, "object", &[], &[], none);

    // Abstract containers.
    define(pool, ClassId::SEQUENCE, "Sequence", &[("T_co", Covariant)], &[], none);
    let t = pool.type_var(ClassId::MUTABLE_SEQUENCE, 0);
    let base = pool.sequence(t);
    define(
        pool,
        ClassId::MUTABLE_SEQUENCE,
        "MutableSequence",
        &[("T", Invariant)],
        &[base],
        none,
    );
    define(
        pool,
        ClassId::MAPPING,
        "Mapping",
        &[("K", Invariant), ("V_co", Covariant)],
        &[],
        none,
    );
    let k = pool.type_var(ClassId::MUTABLE_MAPPING, 0);
    let v = pool.type_var(ClassId::MUTABLE_MAPPING, 1);
    let base = pool.mapping(k, v);
    define(
        pool,
        ClassId::MUTABLE_MAPPING,
        "MutableMapping",
        &[("K", Invariant), ("V", Invariant)],
        &[base],
        none,
    );

    // Scalars.
    define(pool, ClassId::INT, "int", &[], &[], SOLID);
    define(pool, ClassId::BOOL, "bool", &[], &[Idx::INT], SEALED);
    define(pool, ClassId::FLOAT, "float", &[], &[], SOLID);
    define(pool, ClassId::COMPLEX, "complex", &[], &[], SOLID);

    // Text and binary sequences.
    let seq_str = pool.sequence(Idx::STR);
    define(pool, ClassId::STR, "str", &[], &[seq_str], SOLID);
    let seq_int = pool.sequence(Idx::INT);
    define(pool, ClassId::BYTES, "bytes", &[], &[seq_int], SOLID);
    let mut_seq_int = pool.instance(ClassId::MUTABLE_SEQUENCE, &[Idx::INT]);
    define(pool, ClassId::BYTEARRAY, "bytearray", &[], &[mut_seq_int], SOLID);
    define(pool, ClassId::MEMORYVIEW, "memoryview", &[], &[seq_int], SEALED);
    define(pool, ClassId::RANGE, "range", &[], &[seq_int], SEALED);

    // Concrete containers.
    define_mutable_sequence(pool, ClassId::LIST, "list");
    let t = pool.type_var(ClassId::TUPLE, 0);
    let base = pool.sequence(t);
    define(pool, ClassId::TUPLE, "tuple", &[("T_co", Covariant)], &[base], SOLID);
    let k = pool.type_var(ClassId::DICT, 0);
    let v = pool.type_var(ClassId::DICT, 1);
    let base = pool.instance(ClassId::MUTABLE_MAPPING, &[k, v]);
    define(
        pool,
        ClassId::DICT,
        "dict",
        &[("K", Invariant), ("V", Invariant)],
        &[base],
        SOLID,
    );
    define(pool, ClassId::SET, "set", &[("T", Invariant)], &[], SOLID);
    define(pool, ClassId::FROZENSET, "frozenset", &[("T_co", Covariant)], &[], SOLID);
    define_mutable_sequence(pool, ClassId::DEQUE, "deque");
    define_mutable_sequence(pool, ClassId::ARRAY, "array");

    add_numeric_attributes(pool);
}

fn define_mutable_sequence(pool: &mut Pool, id: ClassId, name: &str) {
    let t = pool.type_var(id, 0);
    let base = pool.instance(ClassId::MUTABLE_SEQUENCE, &[t]);
    define(pool, id, name, &[("T", Variance::Invariant)], &[base], SOLID);
}

fn define(
    pool: &mut Pool,
    expected: ClassId,
    name: &str,
    params: &[(&str, Variance)],
    bases: &[Idx],
    flags: ClassFlags,
) {
    let mut def = ClassDef::new(pool.name(name)).with_flags(flags);
    for &(param, variance) in params {
        def = def.with_type_param(pool.name(param), variance);
    }
    for &base in bases {
        def = def.with_base(base);
    }
    let id = pool.define_class(def);
    debug_assert_eq!(id, expected, "builtin `{name}` registered out of order");
}

/// `real` / `imag` on the numeric tower, so keyword patterns on builtins
/// have something to find.
fn add_numeric_attributes(pool: &mut Pool) {
    let real = pool.name("real");
    let imag = pool.name("imag");
    for (class, part) in [
        (ClassId::INT, Idx::INT),
        (ClassId::FLOAT, Idx::FLOAT),
        (ClassId::COMPLEX, Idx::FLOAT),
    ] {
        pool.add_attribute(class, real, part);
        pool.add_attribute(class, imag, part);
    }
}
