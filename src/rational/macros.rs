//! # Operator forwarding
//!
//! Each binary operator is implemented once, for `&Rational` on both sides;
//! these macros generate the owned and mixed receiver combinations from it.

macro_rules! forward_val_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                (&self).$method(rhs)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                self.$method(&rhs)
            }
        }
    };
}

macro_rules! forward_all_binop {
    (impl $imp:ident, $method:ident) => {
        forward_val_val_binop!(impl $imp, $method);
        forward_val_ref_binop!(impl $imp, $method);
        forward_ref_val_binop!(impl $imp, $method);
    };
}
