// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Generates a fresh identifier of the form `{prefix}_{16 hex digits}`.
pub fn generate<T: From<String>>(prefix: &str) -> T {
    T::from(format!("{prefix}_{:016x}", rand::random::<u64>()))
}
