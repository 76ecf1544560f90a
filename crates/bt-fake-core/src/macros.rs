//! Declaration macros.

/// Declare faked functions together with their [`Fake`](crate::Fake) records.
///
/// Each entry emits a function with the given signature and a static record
/// named after the `=>`. The function records its arguments through
/// [`Capture`](crate::Capture) and resolves according to the
/// [call policy](crate::fake).
///
/// ```
/// use bt_fake_core::fake_value_fn;
///
/// fake_value_fn! {
///     /// Set the scan enable state.
///     pub fn bt_le_scan_set_enable(enable: u8) -> i32 => BT_LE_SCAN_SET_ENABLE_FAKE;
/// }
///
/// BT_LE_SCAN_SET_ENABLE_FAKE.set_return_val(-5);
/// assert_eq!(bt_le_scan_set_enable(1), -5);
/// assert_eq!(BT_LE_SCAN_SET_ENABLE_FAKE.arg_history(), vec![(1,)]);
/// ```
#[macro_export]
macro_rules! fake_value_fn {
    ($(
        $(#[$meta:meta])*
        $vis:vis fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty => $fake:ident;
    )+) => {$(
        #[doc = concat!("Record of the `", stringify!($name), "` fake.")]
        $vis static $fake: $crate::Fake<
            ($(<$ty as $crate::Capture>::Captured,)*),
            $ret,
            dyn Fn($($ty),*) -> $ret + Send + Sync,
        > = $crate::Fake::new(stringify!($name));

        $(#[$meta])*
        $vis fn $name($($arg: $ty),*) -> $ret {
            match $fake.record(($($crate::Capture::capture(&$arg),)*)) {
                $crate::Outcome::Return(value) => value,
                $crate::Outcome::Delegate(custom) => $fake.returned((*custom)($($arg),*)),
            }
        }
    )+};
}
