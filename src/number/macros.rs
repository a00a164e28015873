/// Forward the owned and mixed operand forms of a binary operator to the
/// `&T op &T` impl, which does the work.
macro_rules! forward_owned_binop {
    ($t:ty; $($imp:ident :: $method:ident),*) => {$(
        impl $imp<$t> for $t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                (&self).$method(&rhs)
            }
        }

        impl<'a> $imp<&'a $t> for $t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> $t {
                (&self).$method(rhs)
            }
        }

        impl<'a> $imp<$t> for &'a $t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                self.$method(&rhs)
            }
        }
    )*};
}
