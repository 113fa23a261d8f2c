/// Builds an [`Accessor`](crate::Accessor) for a record member.
///
/// The first argument is the record type, the second a member path. Nested
/// members are written with dots and named with their full path.
///
/// # Examples
///
/// ```rust
/// use line_record::field;
///
/// #[derive(Default)]
/// struct Address { city: String }
///
/// #[derive(Default)]
/// struct Person { age: u32, address: Address }
///
/// let age = field!(Person, age);
/// let city = field!(Person, address.city);
/// assert_eq!(age.name(), "age");
/// assert_eq!(city.name(), "address.city");
///
/// let mut person = Person::default();
/// city.set(&mut person, "Lyon".to_string());
/// assert_eq!(person.address.city, "Lyon");
/// ```
#[macro_export]
macro_rules! field {
    ($record:ty, $first:ident $(. $rest:ident)*) => {
        $crate::Accessor::new(
            concat!(stringify!($first) $(, ".", stringify!($rest))*),
            |record: &$record| &record.$first $(.$rest)*,
            |record: &mut $record, value| record.$first $(.$rest)* = value,
        )
    };
}
