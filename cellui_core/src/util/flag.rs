//! Bitwise flags

/// Declare a bitflags set along with a boolean getter and setter for every flag.
///
/// ```text
/// flags_impl!(NodeFlags, u8, HIDDEN = 1 => hidden / set_hidden);
/// ```
#[macro_export]
macro_rules! flags_impl {
  (
    $name:ident,
    $unsigned:ty,
    $($field:ident = $value:expr => $getter:ident / $setter:ident),+ $(,)?
  ) => {
    bitflags::bitflags! {
      #[derive(Copy, Clone, Default, PartialEq, Eq)]
      struct $name: $unsigned {
        $(
          const $field = $value;
        )+
      }
    }

    impl $name {
      $(
        pub fn $getter(&self) -> bool {
          self.contains(Self::$field)
        }

        pub fn $setter(&mut self, value: bool) {
          self.set(Self::$field, value);
        }
      )+
    }

    impl std::fmt::Debug for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(stringify!($name))?;
        f.write_str("(")?;
        bitflags::parser::to_writer(self, &mut *f)?;
        f.write_str(")")
      }
    }
  };
}
