//! Static protocol documentation served to overlay clients.

/// Human-readable description of the marketplace listing protocol.
pub fn protocol_documentation() -> &'static str {
    r#"# Marketplace Protocol

A listing token lets a seller announce an asset for sale and lets buyers
find them; negotiation and the actual exchange happen off-chain. The token
is a lock script carrying three fields:

1. A JSON ownership proof by the seller, verifiable by anyone.
2. A JSON map of asset IDs the seller will accept in return, with amounts
   (-1 means any amount).
3. An optional markdown description of the items for sale.

Admission rules:

1. The token's locking key must be the invoice-derived child of the
   seller's identity key.
2. The ownership proof must be addressed to the public "anyone" key.
3. The ownership proof must be accepted by the verification oracle.
4. The desired-assets map must have well-formed asset IDs and integer
   amounts of at least -1.

Outputs passing all four checks enter the topic's tracked UTXO set and
become discoverable through the lookup service.
"#
}
