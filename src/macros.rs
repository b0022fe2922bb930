/// Build a collection of owned values from literals, e.g. a `Vec<String>`
/// from `&str`s. Test fixtures only.
macro_rules! vec_into {
    ($($x:expr),+ $(,)?) => ({
        let mut v = Vec::new();

        $(
            v.push($x.into());
        )*

        v.into_iter().collect()
    })
}
