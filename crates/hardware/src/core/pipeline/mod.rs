//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the four-stage instruction pipeline.
//! It includes the following components:
//! 1. **Hazards:** The write history that forwards in-flight register values.
//! 2. **Latches:** Single-slot channels between adjacent stages.
//! 3. **Stages:** Implementation of Fetch, Decode, Execute, and Store.

/// Pipeline forwarding logic (register write history).
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/ST).
pub mod latches;

/// Pipeline stage implementations (fetch, decode, execute, store).
pub mod stages;
