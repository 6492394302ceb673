//! Kontrakt des Simulations-Subsystems (Live-Audio).

/// Audio-Konfiguration fuer einen Simulationsstart.
/// Kommt aus dem Audio-Setup-Dialog des Hosts; der Kern reicht sie nur durch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSetup {
    /// Geraetename des Audio-Treibers.
    pub device: String,
    /// Eingangskanaele (Indizes am Geraet).
    pub input_channels: Vec<u32>,
    /// Ausgangskanaele.
    pub output_channels: Vec<u32>,
}

/// Startet Simulationssitzungen fuer ein Dokument.
/// Der Kern liefert Dokument und Audio-Konfiguration und kennt die
/// Simulationssemantik nicht.
pub trait SimulationHost {
    fn launch(&mut self, document_id: u64, audio: &AudioSetup) -> anyhow::Result<()>;
}
