// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transactional mutations over the league schema.
//!
//! Batch operations commit atomically: any row failure rolls the
//! whole batch back. Award writes are idempotent on their natural
//! keys; callers may re-run them freely.

pub mod awards;
pub mod cups;
pub mod fixtures;
pub mod seasons;
pub mod standings;
pub mod teams;
pub mod transition;
