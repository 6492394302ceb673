//! Handler fuer Selektions- und Eigenschaftsereignisse: die Bruecke
//! zwischen Editor-Selektion, Property-Panel und Undo-Historie.

use crate::app::controller::SessionHost;
use crate::app::state::{PanelBinding, SessionState};
use crate::core::{EditRecord, PropertyId, PropertyValue};

/// Uebernimmt eine neue Selektion eines Editors und bindet das Panel um.
///
/// Elemente ohne inspizierbare Komponente (Leitungen etwa) fallen heraus.
/// Der Bindungskontext geht vollstaendig an das meldende Dokument ueber,
/// auch wenn es gerade nicht das aktive ist.
pub fn publish_selection(
    state: &mut SessionState,
    host: &mut SessionHost,
    document_id: u64,
    elements: Vec<u64>,
) {
    let Some(handle) = state.documents.get_mut(document_id) else {
        log::warn!("Selektion fuer unbekanntes Dokument {document_id} verworfen");
        return;
    };

    let components: Vec<u64> = elements
        .iter()
        .filter_map(|element_id| handle.editor().component_of(*element_id))
        .collect();
    handle.set_bound_components(components.clone());

    state.panel_binding = Some(PanelBinding {
        document_id,
        components: components.clone(),
    });
    host.properties.bind(document_id, &components);
    log::debug!(
        "Selektion publiziert: Dokument {document_id}, {} von {} Elementen inspizierbar",
        components.len(),
        elements.len()
    );
}

/// Gibt dem Property-Panel den Eingabefokus (Editor-Geste
/// "Selektion bearbeiten").
pub fn focus_properties(state: &SessionState, host: &mut SessionHost, document_id: u64) {
    if state.documents.get(document_id).is_none() {
        log::warn!("Panel-Fokus fuer unbekanntes Dokument {document_id} ignoriert");
        return;
    }
    host.properties.focus();
}

/// Verbucht eine Eigenschaftsaenderung des Panels in der Undo-Historie.
///
/// Das Panel hat die neuen Werte bereits auf das Komponentenmodell
/// angewendet und liefert pro Komponente den alten Wert. Pro gebundener
/// Komponente entsteht ein Eintrag; bei Mehrfachselektion wandern alle als
/// ein einzelnes Composite in die Historie des gebundenen Dokuments, damit
/// ein Undo die ganze Geste zuruecknimmt. Ohne Bindung wird das Ereignis
/// als veraltet verworfen.
pub fn record_property_edit(
    state: &mut SessionState,
    property: PropertyId,
    old_values: Vec<(u64, PropertyValue)>,
) {
    let Some(binding) = state.panel_binding.clone() else {
        log::debug!("Eigenschaftsaenderung '{property}' ohne Panel-Bindung verworfen");
        return;
    };
    if binding.components.is_empty() {
        log::debug!("Eigenschaftsaenderung '{property}' ohne Selektion verworfen");
        return;
    }
    let Some(handle) = state.documents.get_mut(binding.document_id) else {
        log::error!(
            "Eigenschaftsaenderung fuer nicht registriertes Dokument {}",
            binding.document_id
        );
        debug_assert!(false, "Panel-Bindung zeigt auf entferntes Dokument");
        return;
    };

    let mut edits = Vec::new();
    for (entity_id, old_value) in old_values {
        if !binding.components.contains(&entity_id) {
            log::debug!("Alter Wert fuer nicht gebundene Komponente {entity_id} ignoriert");
            continue;
        }
        let Some(new_value) = handle.editor().property_value(entity_id, &property) else {
            log::warn!("Komponente {entity_id} liefert keinen Wert fuer '{property}'");
            continue;
        };
        edits.push(EditRecord::Property {
            entity_id,
            property: property.clone(),
            old_value,
            new_value,
        });
    }
    if edits.is_empty() {
        log::debug!("Keine verbuchbaren Aenderungen fuer '{property}'");
        return;
    }

    let record = EditRecord::composite(edits);
    let count = record.len();
    handle.record(record);
    log::info!(
        "Eigenschaft '{property}' geaendert, {count} Komponente(n), Dokument {}",
        binding.document_id
    );
}
