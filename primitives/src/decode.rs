use {
  crate::ChangeKind,
  alloc::{string::String, vec::Vec},
  serde::{Deserialize, Deserializer, Serialize},
  thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("State change tagged '{0}' carries no recognized payload")]
  NoPayload(ChangeKind),

  #[error("State change carries more than one payload: {0:?}")]
  MultiplePayloads(Vec<ChangeKind>),

  #[error("State change is tagged '{tagged}' but carries a {populated} payload")]
  KindMismatch {
    tagged: ChangeKind,
    populated: ChangeKind,
  },
}

/// Reads an explicit `null` as the default value of `T`.
///
/// The provider sends `null` for display fields it could not
/// resolve, a single one of those must not fail the whole response.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Wire representation of a single simulated state change.
///
/// The provider models every change as one object with a tag and a
/// `data` object that has one optional field per change kind, of
/// which exactly one is expected to be populated. `D` is the
/// ecosystem specific `data` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStateChange<D> {
  #[serde(default, deserialize_with = "null_as_default")]
  pub human_readable_diff: String,
  pub raw_info: RawInfo<D>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInfo<D> {
  #[serde(default, deserialize_with = "null_as_default")]
  pub kind: ChangeKind,
  pub data: D,
}

/// Turns a wire record into its sum-type representation.
///
/// Two flavours are offered. `decode` never fails: records without
/// a recognized payload become the `Unrecognized` variant of the
/// output, which tolerates schema drift between the wallet and the
/// simulation provider. `decode_strict` rejects anything that does
/// not carry exactly one payload consistent with its tag.
pub trait Decode: Sized {
  type Output;

  /// The tag the provider attached to this record.
  fn tagged(&self) -> &ChangeKind;

  /// Kinds of all payload fields that are populated in this record,
  /// in decoding priority order.
  fn populated(&self) -> Vec<ChangeKind>;

  fn decode(self) -> Self::Output;

  fn decode_strict(self) -> Result<Self::Output, Error> {
    let populated = self.populated();
    match populated.as_slice() {
      [] => Err(Error::NoPayload(self.tagged().clone())),
      [only] => {
        let tagged = self.tagged();
        if tagged.is_known() && tagged != only {
          Err(Error::KindMismatch {
            tagged: tagged.clone(),
            populated: only.clone(),
          })
        } else {
          Ok(self.decode())
        }
      }
      _ => Err(Error::MultiplePayloads(populated)),
    }
  }
}
