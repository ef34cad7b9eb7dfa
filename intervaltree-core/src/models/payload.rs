use std::cmp::Ordering;

use serde_json::Value;

/// Ordering capability for the data carried by an interval.
///
/// Payloads only break ties between intervals with the same begin and end.
/// Two payloads that cannot be ordered against each other (`try_cmp` returns
/// `None`) are ordered by their [`kind`](Payload::kind) name instead, so
/// sorting never fails even when payloads are heterogeneous, as with
/// [`serde_json::Value`].
///
/// ```
/// use std::cmp::Ordering;
/// use intervaltree_core::models::Payload;
/// use serde_json::json;
///
/// assert_eq!("a".try_cmp(&"z"), Some(Ordering::Less));
/// assert_eq!(json!(1).try_cmp(&json!("one")), None);
/// assert_eq!(json!(1).kind(), "number");
/// ```
pub trait Payload {
    /// Name of the type category, used as the last-resort sort key.
    fn kind(&self) -> &'static str;

    fn try_cmp(&self, other: &Self) -> Option<Ordering>;
}

macro_rules! impl_ord_payload {
    ($($t:ty => $kind:literal),* $(,)?) => {
        $(
            impl Payload for $t {
                #[inline]
                fn kind(&self) -> &'static str {
                    $kind
                }

                #[inline]
                fn try_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }
        )*
    };
}

impl_ord_payload!(
    i8 => "int", i16 => "int", i32 => "int", i64 => "int", i128 => "int", isize => "int",
    u8 => "int", u16 => "int", u32 => "int", u64 => "int", u128 => "int", usize => "int",
    bool => "bool",
    char => "str",
    str => "str",
    String => "str",
    () => "unit",
);

impl Payload for f32 {
    fn kind(&self) -> &'static str {
        "float"
    }

    fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }
}

impl Payload for f64 {
    fn kind(&self) -> &'static str {
        "float"
    }

    fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }
}

impl<T> Payload for &T
where
    T: Payload + ?Sized,
{
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).try_cmp(*other)
    }
}

impl<T> Payload for Box<T>
where
    T: Payload + ?Sized,
{
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).try_cmp(&**other)
    }
}

impl<T> Payload for [T]
where
    T: Payload,
{
    fn kind(&self) -> &'static str {
        "list"
    }

    fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        cmp_sequences(self, other)
    }
}

impl<T> Payload for Vec<T>
where
    T: Payload,
{
    fn kind(&self) -> &'static str {
        "list"
    }

    fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        cmp_sequences(self, other)
    }
}

impl<A, B> Payload for (A, B)
where
    A: Payload,
    B: Payload,
{
    fn kind(&self) -> &'static str {
        "tuple"
    }

    fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.try_cmp(&other.0)? {
            Ordering::Equal => self.1.try_cmp(&other.1),
            ord => Some(ord),
        }
    }
}

impl<A, B, C> Payload for (A, B, C)
where
    A: Payload,
    B: Payload,
    C: Payload,
{
    fn kind(&self) -> &'static str {
        "tuple"
    }

    fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.try_cmp(&other.0)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        match self.1.try_cmp(&other.1)? {
            Ordering::Equal => self.2.try_cmp(&other.2),
            ord => Some(ord),
        }
    }
}

/// JSON values are the heterogeneous payload: values of the same kind
/// compare naturally, values of different kinds do not compare at all.
/// Objects only compare equal to identical objects.
impl Payload for Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Number(a), Value::Number(b)) => {
                if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                    Some(a.cmp(&b))
                } else if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                    Some(a.cmp(&b))
                } else {
                    a.as_f64()?.partial_cmp(&b.as_f64()?)
                }
            }
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Array(a), Value::Array(b)) => cmp_sequences(a, b),
            (Value::Object(a), Value::Object(b)) if a == b => Some(Ordering::Equal),
            _ => None,
        }
    }
}

/// Lexicographic ordering; `None` as soon as one element pair is incomparable.
fn cmp_sequences<T>(a: &[T], b: &[T]) -> Option<Ordering>
where
    T: Payload,
{
    for (x, y) in a.iter().zip(b) {
        match x.try_cmp(y)? {
            Ordering::Equal => continue,
            ord => return Some(ord),
        }
    }
    Some(a.len().cmp(&b.len()))
}
