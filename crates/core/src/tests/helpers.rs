// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::{date, datetime};
use wds_domain::{
    AdminActor, Declaration, DeclarationStatus, DeclarationType, FinancialProfile,
};

pub const REVIEW_TIME: OffsetDateTime = datetime!(2026-03-15 12:00 UTC);

pub fn create_test_declaration() -> Declaration {
    let mut declaration: Declaration = Declaration::new(
        7,
        DeclarationType::Biennial,
        date!(2024 - 01 - 01),
        date!(2025 - 12 - 31),
        FinancialProfile::default(),
        Vec::new(),
    )
    .unwrap();
    declaration.declaration_id = Some(1);
    declaration
}

pub fn create_reviewed_declaration(
    status: DeclarationStatus,
    correction_message: Option<&str>,
) -> Declaration {
    let mut declaration: Declaration = create_test_declaration();
    declaration.status = status;
    declaration.correction_message = correction_message.map(String::from);
    declaration.approved_at = Some(datetime!(2026-03-01 09:00 UTC));
    declaration
}

pub const fn create_test_admin() -> AdminActor {
    AdminActor::new(11, false)
}

pub const fn create_test_super_admin() -> AdminActor {
    AdminActor::new(12, true)
}
