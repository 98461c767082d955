//! The built-in entry list: digests paired with small integer labels.
use alloy_primitives::b256;
use level_trie::Entry;
use serde_json::Value;

pub(crate) fn entries() -> Vec<Entry<Value>> {
    [
        (b256!("4c80cc05da728dd30c59bec09a919b11b7ce8de10a5bb571f82c3bd3abfa49e3"), 0),
        (b256!("d46e7532c5d699ad6619c41bf76cbe571cab54b343842aa9e89464319289016d"), 2),
        (b256!("9bccfd46dd5be0b3dc92790231a162b9634efc36da7579583010c9cd061b692c"), 1),
        (b256!("0b4c13cea8b85180577bf52fe55adb9042c836b1e63eca1e6f2eee9b63e506fd"), 1),
        (b256!("19ac6ec856d9e715c498693d0509ef33d39435795b7cce74f9182b9012d66df3"), 0),
        (b256!("245280404ce6a938cc3f853574b52c4c71b8c730e4872eaa5c0ad980384846f4"), 0),
        (b256!("37b9be89f8b7b7675d15a8521455f3691cd22a6968cf9b8b35293456b5dc999d"), 0),
        (b256!("f79eb2d55c0779d95576cd28b8222c2c8ac4c6a8473bfa26fcf0556e7a4e2123"), 2),
        (b256!("e714d38b4571f4aca69f83d909d6f2f3a8016b5b0a343295724bc6925ddcc66f"), 0),
        (b256!("66bf03e6b4ab190a4ccae05b490d428f27169c3a23492d2a5b159d50650ad463"), 0),
        (b256!("027e9c8c581079843a5c2e9b7fa3056dffcfdb392b68979c3294f8fda2b944cb"), 1),
        (b256!("7eda419a11ff7d0571582c217465a1e70d9b444bde2f97abd99ef37ec89f3cb7"), 0),
        (b256!("114cd4f5b24999225b444944778dc08306e3f28e485457669dcfc532e0ee03da"), 1),
        (b256!("e09e09399a6e426def72adfc4926e064276f52bc30a9e3c84a1ace2e89e5d11e"), 0),
        (b256!("42565995914fd037b9316763e9375e993bdb1da5c8a09ec28ebddc0c7d209eb1"), 0),
        (b256!("15a89a06690474d46c268529845b334101c733ae2adbd76147bbafa2608b4979"), 1),
        (b256!("e1f44457ef3ca03d69cd1f8eedf45b0e4fd76fec124fc41215fb5b6588e645e1"), 0),
        (b256!("343fe6f09c1bb4d5be1d2b54215d8a17f34f2e6921e47277ba41212f16cbbd51"), 2),
        (b256!("27c4738cb446e92ae704fc723ef00c77353f9bf2efb28803bb6c794a4464b07b"), 0),
    ]
    .into_iter()
    .map(|(digest, label)| Entry::from_digest(digest, Value::from(label)))
    .collect()
}
