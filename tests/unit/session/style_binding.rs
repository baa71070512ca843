use super::*;

#[test]
fn binding_inserts_updates_and_removes_one_sheet() {
    let mut host = InMemoryStyleHost::new();
    let id;
    {
        let mut binding = StyleBinding::acquire(&mut host, ".stage{}").unwrap();
        id = binding.sheet();
        binding.apply(".stage{display:flex}").unwrap();
        assert_eq!(binding.text(), ".stage{display:flex}");
        assert_eq!(
            binding.host().sheet_text(id),
            Some(".stage{display:flex}")
        );
        assert_eq!(binding.host().sheet_count(), 1);
    }
    assert_eq!(host.sheet_count(), 0);
    assert!(host.sheet_text(id).is_none());
}

#[test]
fn owned_host_is_released_on_drop() {
    let binding = StyleBinding::acquire(InMemoryStyleHost::new(), "").unwrap();
    assert_eq!(binding.host().sheet_count(), 1);
    drop(binding);
}

#[test]
fn set_on_detached_sheet_is_an_error() {
    let mut host = InMemoryStyleHost::new();
    let id = host.insert_sheet("a").unwrap();
    host.remove_sheet(id);
    assert!(host.set_sheet_text(id, "b").is_err());
}
