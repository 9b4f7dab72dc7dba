use sha2::{Digest, Sha256};

/// The content-derived identifier of a query document: the lowercase hex SHA-256 of its
/// exact bytes.
///
/// This is the same hash servers use for persisted queries, so the document must be
/// hashed verbatim, whitespace included.
pub fn operation_id(query: &str) -> String {
    let digest = <Sha256 as Digest>::digest(query.as_bytes());
    hex::encode(digest)
}
