use crate::cli::arg_parser::Session;
use crate::cli::utils as parse_utils;
use crate::core::analysis::SplitError;
use crate::core::settlement::ItemAllocation;
use crate::utils;

// Contains any pattern based parsing of inputs for the package.

impl Session {
    fn align_to_people(&mut self, abbrevs: &str) -> Result<Vec<String>, SplitError> {
        let abbrevs: Vec<&str> = abbrevs.split(",").collect();

        utils::is_string_vec_unique(
            &abbrevs,
            SplitError::InvalidAbbreviation(format!(
                "The abbreviation string: {} has duplicates.",
                abbrevs.join(",")
            )),
        )?;

        let mut matched_ids: Vec<String> = Vec::new();

        // Case is important - Don vs. don can be considered different people.
        // Minimal disruption to user, less code to peruse.
        for abbrev in abbrevs {
            // If the abbreviation is already mapped to an existing person:
            if let Some(existing_id) = self.mapped_abbreviations.get(abbrev) {
                if matched_ids.contains(existing_id) {
                    return Err(SplitError::DuplicatePeopleError(format!(
                        "{} maps to {}, which has already been specified once.",
                        abbrev, existing_id
                    )));
                } else {
                    matched_ids.push(existing_id.clone());
                }
            } else {
                // If the abbreviation is not mapped, try to find a map: an
                // exact person id wins, otherwise the first unmatched person
                // whose name the abbreviation fits.
                let mut found = false;

                for person in &self.people {
                    let matches = person.id == abbrev
                        || utils::is_abbrev_match_to_string(abbrev, &person.name);
                    if matches & !matched_ids.contains(&person.id) {
                        self.mapped_abbreviations
                            .insert(abbrev.to_string(), person.id.clone());
                        found = true;
                        matched_ids.push(person.id.clone());
                        break;
                    }
                }

                // Not finding a match is an error.
                if !found {
                    return Err(SplitError::InvalidAbbreviation(format!(
                        "{} does not match to a person in the session.",
                        abbrev
                    )));
                }
            }
        }

        Ok(matched_ids)
    }

    // Applies one "--assign Item,Ab,Cd" pattern: the named item's allocation
    // is replaced with the resolved people, or cleared when no people are
    // given.
    pub fn parse_assignment(&mut self, pattern: &str) -> Result<(), SplitError> {
        let (item_ref, abbrevs) = parse_utils::split_by_comma(
            pattern,
            &format!(
                "An assignment must have pattern 'Item,Person_1[,Person_2,...]', but you have {}",
                pattern
            ),
        )?;

        let item_id = self
            .receipt
            .items
            .iter()
            .find(|item| item.id == item_ref || item.name == item_ref)
            .map(|item| item.id.clone())
            .ok_or_else(|| {
                SplitError::InvalidArgument(format!(
                    "{} does not match any item id or name on the receipt.",
                    item_ref
                ))
            })?;

        self.allocations.retain(|alloc| alloc.item_id != item_id);
        if !abbrevs.is_empty() {
            let person_ids = self.align_to_people(&abbrevs)?;
            self.allocations.push(ItemAllocation {
                item_id,
                person_ids,
            });
        }

        Ok(())
    }
}
