//! Shared fixtures for editor and store tests

/// A generated sample script exercising every markup convention: title,
/// logline, character bullets, sluglines, speaker cues, and inline
/// emphasis.
pub const SAMPLE_SCRIPT: &str = "\
# The Cartographer's Debt

Logline: *A mapmaker discovers her city is redrawing itself overnight.*

Characters:
- **Mara**: a cartographer who trusts ink over memory
- **Theo**: her apprentice, who has stopped sleeping

INT. MAP ARCHIVE - NIGHT

Mara traces a street that wasn't there yesterday.

**MARA**
The river moved again.

EXT. CANAL DISTRICT - DAWN

Theo waits at the water line, counting *every* bridge.
";
