/// Declares the `Globals` signal bundle together with one accessor function
/// per field.
///
/// Usage:
/// `global_signals! {
///     pub fn_name => field: Type = initial,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty = $init:expr ),+ $(,)? ) => {
        pub struct Globals {
            $( pub $field: ::leptos::RwSignal<$ty>, )+
        }

        impl Globals {
            fn create() -> Self {
                Self { $( $field: ::leptos::create_rw_signal($init), )+ }
            }
        }

        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
