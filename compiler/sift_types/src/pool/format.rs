//! Type formatting for diagnostics and `reveal_type`.

use crate::{ClassId, Idx, LiteralValue, Pool, TypeData};

impl Pool {
    /// Format a type as a human-readable string.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        match self.data(idx) {
            TypeData::Never => buf.push_str("Never"),
            TypeData::Any => buf.push_str("Any"),
            TypeData::NoneType => buf.push_str("None"),
            TypeData::Instance { class, args } => {
                buf.push_str(self.class_name(*class));
                if args.is_empty() {
                    return;
                }
                buf.push('[');
                self.format_list(args, buf);
                if *class == ClassId::TUPLE {
                    buf.push_str(", ...");
                }
                buf.push(']');
            }
            TypeData::Literal { value, .. } => {
                buf.push_str("Literal[");
                self.format_literal(*value, buf);
                buf.push(']');
            }
            TypeData::Tuple(items) => {
                buf.push_str("tuple[");
                if items.is_empty() {
                    buf.push_str("()");
                } else {
                    self.format_list(items, buf);
                }
                buf.push(']');
            }
            TypeData::Union(members) => {
                buf.push_str("Union[");
                self.format_list(members, buf);
                buf.push(']');
            }
            TypeData::TypedDict(class) => buf.push_str(self.class_name(*class)),
            TypeData::TypeVar { owner, index } => {
                let def = self.classes().get(*owner);
                match def.type_params.get(*index as usize) {
                    Some(param) => buf.push_str(self.interner().lookup(param.name)),
                    None => buf.push_str("<unknown>"),
                }
            }
        }
    }

    fn format_list(&self, items: &[Idx], buf: &mut String) {
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.format_type_into(item, buf);
        }
    }

    fn format_literal(&self, value: LiteralValue, buf: &mut String) {
        match value {
            LiteralValue::Int(n) => buf.push_str(&n.to_string()),
            LiteralValue::Bool(true) => buf.push_str("True"),
            LiteralValue::Bool(false) => buf.push_str("False"),
            LiteralValue::Str(s) => {
                buf.push('\'');
                buf.push_str(self.interner().lookup(s));
                buf.push('\'');
            }
            LiteralValue::Bytes(s) => {
                buf.push_str("b'");
                buf.push_str(self.interner().lookup(s));
                buf.push('\'');
            }
        }
    }

    /// Source name of a class.
    pub fn class_name(&self, class: ClassId) -> &'static str {
        self.interner().lookup(self.classes().get(class).name)
    }
}
