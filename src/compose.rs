//! Small higher-order helpers: composition, predicate negation and scoped resources

/// Compose two unary functions: `compose(f, g)(x) == g(f(x))`
///
/// # Examples
///
/// ```
/// use katabind::compose::compose;
///
/// let shout = compose(|s: &str| s.trim().to_string(), |s: String| s.to_uppercase());
/// assert_eq!(shout("  hi "), "HI");
/// ```
pub fn compose<T, X, R, F, G>(f: F, g: G) -> impl Fn(T) -> R
where
    F: Fn(T) -> X,
    G: Fn(X) -> R,
{
    move |x| g(f(x))
}

/// The logical inverse of `predicate`
pub fn negate<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |value: &T| !predicate(value)
}

/// Create a resource, lend it to `f`, and drop it before returning `f`'s result
pub fn using<D, R, C, F>(create: C, f: F) -> R
where
    C: FnOnce() -> D,
    F: FnOnce(&mut D) -> R,
{
    let mut resource = create();
    f(&mut resource)
}
