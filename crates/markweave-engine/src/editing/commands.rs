use std::{fmt, str::FromStr};

use crate::ast::{IdGenerator, ListType, NodeIndex, NodeKind, Tree, ZWSP};

use super::{
    error::{CommandError, ParseCommandError},
    patch::{CommandStatus, Patch},
};

/// A cursor-relative list command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    /// Tab: nest the item under its preceding sibling.
    Indent,
    /// Shift-Tab: lift the item out of its nested list.
    Outdent,
    /// Enter: cut the item in two at the caret.
    Split,
}

impl ListCommand {
    pub fn name(self) -> &'static str {
        match self {
            ListCommand::Indent => "tab",
            ListCommand::Outdent => "stab",
            ListCommand::Split => "enter",
        }
    }
}

impl fmt::Display for ListCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ListCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tab" | "indent" => Ok(ListCommand::Indent),
            "stab" | "outdent" | "deindent" => Ok(ListCommand::Outdent),
            "enter" | "split" => Ok(ListCommand::Split),
            _ => Err(ParseCommandError {
                name: s.to_string(),
            }),
        }
    }
}

/// Applies `command` at the tree's caret.
///
/// The tree must hold exactly one `Caret`. A caret outside any list item, or
/// a command that cannot apply where the caret is, yields
/// [`CommandStatus::NotApplicable`] and leaves the tree as it was.
pub fn apply_list_command(
    tree: &mut Tree,
    command: ListCommand,
    ids: &mut dyn IdGenerator,
) -> Result<Patch, CommandError> {
    let caret = find_caret(tree)?;
    let Some(item) = tree
        .ancestors(caret)
        .find(|n| tree.kind(*n).is_list_item())
    else {
        log::debug!("{command}: caret is not inside a list item");
        return Ok(Patch::not_applicable());
    };

    let mut edit = Edit {
        tree,
        ids,
        touched: vec![],
    };
    let applied = match command {
        ListCommand::Indent => edit.indent(item),
        ListCommand::Outdent => edit.outdent(item),
        ListCommand::Split => edit.split(item, caret),
    };
    if !applied {
        log::debug!("{command}: not applicable at item {}", edit.tree.id(item));
        return Ok(Patch::not_applicable());
    }

    let patch = edit.finish(caret);
    log::debug!(
        "{command}: applied, {} list(s) changed",
        patch.changed_lists.len()
    );
    Ok(patch)
}

fn find_caret(tree: &Tree) -> Result<NodeIndex, CommandError> {
    match tree.find_all(|k| matches!(k, NodeKind::Caret)).as_slice() {
        [] => Err(CommandError::NoCaret),
        [caret] => Ok(*caret),
        many => Err(CommandError::MultipleCarets { count: many.len() }),
    }
}

/// One command in flight: the tree, the id source and the lists touched so far.
///
/// Every method checks its preconditions before mutating, so returning
/// `false` always means the tree is unchanged.
struct Edit<'t> {
    tree: &'t mut Tree,
    ids: &'t mut dyn IdGenerator,
    touched: Vec<NodeIndex>,
}

impl Edit<'_> {
    fn indent(&mut self, item: NodeIndex) -> bool {
        let (Some(prev), Some(list)) = (self.tree.previous_sibling(item), self.tree.parent(item))
        else {
            return false;
        };
        let NodeKind::List { list_type, .. } = *self.tree.kind(list) else {
            return false;
        };
        let own_sublist = self.nested_list(item);
        let target = self.nested_list(prev);

        self.tree.detach(item);
        self.touch(list);

        match (target, own_sublist) {
            (Some(target), own) => {
                self.tree.append_child(target, item);
                // The item's own children stay at their visual depth
                if let Some(own) = own {
                    for child in self.tree.children(own).to_vec() {
                        self.tree.move_to(child, target);
                    }
                    self.tree.detach(own);
                }
                self.touch(target);
            }
            (None, Some(own)) => {
                self.tree.detach(own);
                self.tree.insert_child(own, 0, item);
                self.ensure_leading_paragraph(prev);
                self.tree.append_child(prev, own);
                self.touch(own);
            }
            (None, None) => {
                let kind = NodeKind::List {
                    list_type: nested_list_type(list_type),
                    tight: true,
                };
                let sublist = self.tree.create(kind, self.ids.next_id());
                self.ensure_leading_paragraph(prev);
                self.tree.append_child(prev, sublist);
                self.tree.append_child(sublist, item);
                self.touch(sublist);
            }
        }
        true
    }

    fn outdent(&mut self, item: NodeIndex) -> bool {
        let Some(list) = self.tree.parent(item) else {
            return false;
        };
        let Some(parent_item) = self
            .tree
            .parent(list)
            .filter(|p| self.tree.kind(*p).is_list_item())
        else {
            return false;
        };
        let Some(outer) = self.tree.parent(parent_item) else {
            return false;
        };

        let following = self.tree.following_siblings(item);
        self.tree.detach(item);
        self.tree.insert_after(parent_item, item);
        self.touch(list);
        self.touch(outer);

        // Later siblings become the outdented item's children
        if !following.is_empty() {
            match self.nested_list(item) {
                Some(own) => {
                    for sibling in following {
                        self.tree.move_to(sibling, own);
                    }
                    self.touch(own);
                }
                None => self.tree.move_to(list, item),
            }
        }

        if self.tree.children(list).is_empty() {
            self.tree.detach(list);
        }
        if self.tree.children(parent_item).is_empty() {
            let para = self.placeholder_paragraph();
            self.tree.append_child(parent_item, para);
        }
        true
    }

    fn split(&mut self, item: NodeIndex, caret: NodeIndex) -> bool {
        let Some(para) = self
            .tree
            .ancestors(caret)
            .find(|n| self.tree.kind(*n).is_block())
        else {
            return false;
        };
        if !matches!(self.tree.kind(para), NodeKind::Paragraph) || self.tree.parent(para) != Some(item)
        {
            return false;
        }
        let (Some(list), NodeKind::ListItem { marker }) =
            (self.tree.parent(item), self.tree.kind(item).clone())
        else {
            return false;
        };
        // Outermost inline holding the caret, so a caret inside a link moves the whole link
        let Some(at) = self
            .tree
            .ancestors(caret)
            .find(|n| self.tree.parent(*n) == Some(para))
            .and_then(|top| self.tree.index_in_parent(top))
        else {
            return false;
        };

        let tail = self.tree.children(para)[at..].to_vec();
        let later_blocks = self.tree.following_siblings(para);

        let new_item = self
            .tree
            .create(NodeKind::ListItem { marker }, self.ids.next_id());
        let new_para = self.tree.create(NodeKind::Paragraph, self.ids.next_id());
        self.tree.append_child(new_item, new_para);
        for node in tail {
            self.tree.move_to(node, new_para);
        }
        for block in later_blocks {
            self.tree.move_to(block, new_item);
        }
        self.tree.insert_after(item, new_item);
        self.touch(list);

        if self.tree.children(para).is_empty() {
            self.push_placeholder_text(para, 0);
        }
        true
    }

    /// Fixes up the caret's paragraph, recomputes touched lists and builds the patch.
    fn finish(mut self, caret: NodeIndex) -> Patch {
        let caret_block = self
            .tree
            .ancestors(caret)
            .find(|n| self.tree.kind(*n).is_block());

        if let Some(block) = caret_block
            && matches!(self.tree.kind(block), NodeKind::Paragraph)
            && self.tree.children(block) == [caret]
        {
            self.push_placeholder_text(block, 0);
        }

        let mut changed_lists = vec![];
        for list in std::mem::take(&mut self.touched) {
            if !self.is_attached(list) {
                continue;
            }
            self.refresh_list(list);
            changed_lists.push(self.tree.id(list).clone());
        }

        Patch {
            status: CommandStatus::Applied,
            changed_lists,
            caret_block: caret_block.map(|b| self.tree.id(b).clone()),
        }
    }

    /// Recomputes `tight` and renumbers item markers from the list's type.
    fn refresh_list(&mut self, list: NodeIndex) {
        let items = self.tree.children(list).to_vec();
        let tight = items.iter().all(|item| {
            self.tree
                .children(*item)
                .iter()
                .filter(|c| !self.tree.kind(**c).is_list())
                .count()
                <= 1
        });
        let NodeKind::List {
            list_type,
            tight: current,
        } = self.tree.kind_mut(list)
        else {
            return;
        };
        *current = tight;
        let list_type = *list_type;

        for (position, item) in items.into_iter().enumerate() {
            if let NodeKind::ListItem { marker } = self.tree.kind_mut(item) {
                *marker = list_type.marker_for(position);
            }
        }
    }

    fn nested_list(&self, item: NodeIndex) -> Option<NodeIndex> {
        self.tree
            .last_child(item)
            .filter(|c| self.tree.kind(*c).is_list())
    }

    /// An item that is about to receive a nested list keeps a paragraph in front of it.
    fn ensure_leading_paragraph(&mut self, item: NodeIndex) {
        let has_content = self
            .tree
            .children(item)
            .iter()
            .any(|c| !self.tree.kind(*c).is_list());
        if !has_content {
            let para = self.placeholder_paragraph();
            self.tree.insert_child(item, 0, para);
        }
    }

    fn placeholder_paragraph(&mut self) -> NodeIndex {
        let para = self.tree.create(NodeKind::Paragraph, self.ids.next_id());
        self.push_placeholder_text(para, 0);
        para
    }

    fn push_placeholder_text(&mut self, parent: NodeIndex, position: usize) {
        let text = self
            .tree
            .create(NodeKind::Text(ZWSP.to_string()), self.ids.next_id());
        self.tree.insert_child(parent, position, text);
    }

    fn touch(&mut self, list: NodeIndex) {
        if !self.touched.contains(&list) {
            self.touched.push(list);
        }
    }

    fn is_attached(&self, ix: NodeIndex) -> bool {
        self.tree.ancestors(ix).last() == Some(self.tree.root())
    }
}

/// New nested ordered lists count from one.
fn nested_list_type(parent: ListType) -> ListType {
    match parent {
        ListType::Ordered { delimiter, .. } => ListType::Ordered {
            start: 1,
            delimiter,
        },
        bullet => bullet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{FixedIdGenerator, NodeId, SequentialIdGenerator, TESTING_ID, format_outline, invariants},
        parsing::{ParseOptions, parse},
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn seq(n: u32) -> NodeId {
        NodeId::new(format!("20210130000000-{n:07}"))
    }

    fn parsed(md: &str) -> Tree {
        parse(md, &ParseOptions::default(), &mut SequentialIdGenerator::default())
    }

    fn run(md: &str, command: ListCommand) -> (Tree, Patch) {
        let mut tree = parsed(md);
        let patch = apply_list_command(&mut tree, command, &mut FixedIdGenerator).unwrap();
        invariants::check(&tree);
        (tree, patch)
    }

    fn outline(tree: &Tree) -> String {
        format_outline(tree, false)
    }

    // ---- command names ----

    #[rstest]
    #[case("tab", ListCommand::Indent)]
    #[case("indent", ListCommand::Indent)]
    #[case("stab", ListCommand::Outdent)]
    #[case("deindent", ListCommand::Outdent)]
    #[case("Outdent", ListCommand::Outdent)]
    #[case("enter", ListCommand::Split)]
    #[case(" split ", ListCommand::Split)]
    fn command_names(#[case] name: &str, #[case] expected: ListCommand) {
        assert_eq!(name.parse::<ListCommand>(), Ok(expected));
    }

    #[test]
    fn unknown_command_name() {
        let err = "backspace".parse::<ListCommand>().unwrap_err();
        assert_eq!(err.name, "backspace");
        assert_eq!(ListCommand::Split.to_string(), "enter");
    }

    // ---- preconditions ----

    #[test]
    fn missing_caret_is_an_error() {
        let mut tree = parsed("- a\n");
        assert_eq!(
            apply_list_command(&mut tree, ListCommand::Indent, &mut FixedIdGenerator),
            Err(CommandError::NoCaret)
        );
    }

    #[test]
    fn two_carets_are_an_error() {
        let mut tree = parsed("- a\u{2038}\n- b\u{2038}\n");
        assert_eq!(
            apply_list_command(&mut tree, ListCommand::Split, &mut FixedIdGenerator),
            Err(CommandError::MultipleCarets { count: 2 })
        );
    }

    #[rstest]
    #[case::caret_outside_list("para\u{2038}\n", ListCommand::Split)]
    #[case::indent_first_item("- \u{2038}a\n- b\n", ListCommand::Indent)]
    #[case::outdent_top_level("- a\n- \u{2038}b\n", ListCommand::Outdent)]
    #[case::split_in_quote_inside_item("- > a\u{2038}\n", ListCommand::Split)]
    fn not_applicable_leaves_tree_alone(#[case] md: &str, #[case] command: ListCommand) {
        let mut tree = parsed(md);
        let before = tree.clone();
        let patch = apply_list_command(&mut tree, command, &mut FixedIdGenerator).unwrap();
        assert_eq!(patch, Patch::not_applicable());
        assert_eq!(tree, before);
    }

    // ---- indent ----

    #[test]
    fn indent_creates_sublist() {
        let (tree, patch) = run("* foo\n* \u{2038}bar\n", ListCommand::Indent);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List * tight
            ListItem *
              Paragraph
                Text "foo"
              List * tight
                ListItem *
                  Paragraph
                    Caret
                    Text "bar"
        "#);
        assert_eq!(
            patch,
            Patch {
                status: CommandStatus::Applied,
                changed_lists: vec![seq(2), NodeId::new(TESTING_ID)],
                caret_block: Some(seq(7)),
            }
        );
        // moved item keeps its id
        assert!(tree.find_by_id(seq(6).as_str()).is_some());
    }

    #[test]
    fn indent_appends_to_existing_sublist() {
        let (tree, _) = run("* foo\n  * bar\n* \u{2038}baz\n", ListCommand::Indent);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List * tight
            ListItem *
              Paragraph
                Text "foo"
              List * tight
                ListItem *
                  Paragraph
                    Text "bar"
                ListItem *
                  Paragraph
                    Caret
                    Text "baz"
        "#);
    }

    #[test]
    fn indent_reuses_own_sublist_when_target_has_none() {
        let (tree, _) = run("* foo\n* \u{2038}\n  * ccc\n", ListCommand::Indent);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List * tight
            ListItem *
              Paragraph
                Text "foo"
              List * tight
                ListItem *
                  Paragraph
                    Text "\u{200b}"
                    Caret
                ListItem *
                  Paragraph
                    Text "ccc"
        "#);
        // doc 1, list 2, item 3, para 4, text 5, item 6, para 7, caret 8, sublist 9
        let sublist = tree.find_by_id(seq(9).as_str()).unwrap();
        assert_eq!(tree.parent(sublist), tree.find_by_id(seq(3).as_str()));
    }

    #[test]
    fn indent_flattens_own_sublist_into_existing_target() {
        let (tree, _) = run("- a\n  - x\n- \u{2038}b\n  - c\n", ListCommand::Indent);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List - tight
            ListItem -
              Paragraph
                Text "a"
              List - tight
                ListItem -
                  Paragraph
                    Text "x"
                ListItem -
                  Paragraph
                    Caret
                    Text "b"
                ListItem -
                  Paragraph
                    Text "c"
        "#);
    }

    #[test]
    fn indent_into_empty_item_adds_placeholder_paragraph() {
        let (tree, _) = run("* foo\n\n  *\n  * \u{2038}bar\n", ListCommand::Indent);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List * loose
            ListItem *
              Paragraph
                Text "foo"
              List * tight
                ListItem *
                  Paragraph
                    Text "\u{200b}"
                  List * tight
                    ListItem *
                      Paragraph
                        Caret
                        Text "bar"
        "#);
    }

    #[test]
    fn indent_renumbers_ordered_lists() {
        let (tree, _) = run("1. a\n2. \u{2038}b\n3. c\n", ListCommand::Indent);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List 1. tight
            ListItem 1.
              Paragraph
                Text "a"
              List 1. tight
                ListItem 1.
                  Paragraph
                    Caret
                    Text "b"
            ListItem 2.
              Paragraph
                Text "c"
        "#);
    }

    // ---- outdent ----

    #[test]
    fn outdent_last_item_removes_empty_sublist() {
        let (tree, patch) = run("* foo\n  * \u{2038}bar\n", ListCommand::Outdent);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List * tight
            ListItem *
              Paragraph
                Text "foo"
            ListItem *
              Paragraph
                Caret
                Text "bar"
        "#);
        assert_eq!(patch.changed_lists, vec![seq(2)]);
        assert_eq!(patch.caret_block, Some(seq(8)));
        let moved = tree.find_by_id(seq(7).as_str()).unwrap();
        assert_eq!(tree.parent(moved), tree.find_by_id(seq(2).as_str()));
        assert_eq!(tree.find_by_id(seq(6).as_str()), None);
    }

    #[test]
    fn outdent_takes_following_siblings_along() {
        let (tree, _) = run("* foo\n  * \u{2038}\n  * bar\n", ListCommand::Outdent);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List * tight
            ListItem *
              Paragraph
                Text "foo"
            ListItem *
              Paragraph
                Text "\u{200b}"
                Caret
              List * tight
                ListItem *
                  Paragraph
                    Text "bar"
        "#);
        // the remainder keeps the old sublist's id
        let sublist = tree.find_by_id(seq(6).as_str()).unwrap();
        assert_eq!(tree.parent(sublist), tree.find_by_id(seq(7).as_str()));
    }

    #[test]
    fn outdent_appends_followers_to_own_sublist() {
        let (tree, _) = run("- a\n  - \u{2038}b\n    - c\n  - d\n", ListCommand::Outdent);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List - tight
            ListItem -
              Paragraph
                Text "a"
            ListItem -
              Paragraph
                Caret
                Text "b"
              List - tight
                ListItem -
                  Paragraph
                    Text "c"
                ListItem -
                  Paragraph
                    Text "d"
        "#);
    }

    #[test]
    fn outdent_recomputes_tightness() {
        let tree = parsed("- a\n\n  - \u{2038}b\n");
        assert!(format_outline(&tree, false).contains("List - loose"));

        let (tree, _) = run("- a\n\n  - \u{2038}b\n", ListCommand::Outdent);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List - tight
            ListItem -
              Paragraph
                Text "a"
            ListItem -
              Paragraph
                Caret
                Text "b"
        "#);
    }

    #[test]
    fn outdent_fills_emptied_parent_item() {
        let (tree, _) = run("-\n  - \u{2038}a\n", ListCommand::Outdent);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List - tight
            ListItem -
              Paragraph
                Text "\u{200b}"
            ListItem -
              Paragraph
                Caret
                Text "a"
        "#);
    }

    // ---- split ----

    #[test]
    fn split_at_end_moves_nested_list_to_new_item() {
        let (tree, patch) = run("* foo\u{2038}\n  * bar\n", ListCommand::Split);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List * tight
            ListItem *
              Paragraph
                Text "foo"
            ListItem *
              Paragraph
                Text "\u{200b}"
                Caret
              List * tight
                ListItem *
                  Paragraph
                    Text "bar"
        "#);
        assert_eq!(patch.caret_block, Some(NodeId::new(TESTING_ID)));
        // doc 1, list 2, item 3, para 4, text 5, caret 6, sublist 7
        let sublist = tree.find_by_id(seq(7).as_str()).unwrap();
        assert_eq!(tree.id(tree.parent(sublist).unwrap()).as_str(), TESTING_ID);
    }

    #[test]
    fn split_in_the_middle() {
        let (tree, _) = run("- foo\u{2038}bar\n", ListCommand::Split);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List - tight
            ListItem -
              Paragraph
                Text "foo"
            ListItem -
              Paragraph
                Caret
                Text "bar"
        "#);
    }

    #[test]
    fn split_at_start_leaves_placeholder_behind() {
        let (tree, _) = run("- \u{2038}foo\n", ListCommand::Split);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List - tight
            ListItem -
              Paragraph
                Text "\u{200b}"
            ListItem -
              Paragraph
                Caret
                Text "foo"
        "#);
    }

    #[test]
    fn repeated_split_keeps_adding_placeholder_items() {
        let mut tree = parsed("- a\u{2038}\n");
        for _ in 0..3 {
            let patch = apply_list_command(&mut tree, ListCommand::Split, &mut FixedIdGenerator)
                .unwrap();
            assert!(patch.is_applied());
            invariants::check(&tree);
        }
        let items = tree.find_all(|k| k.is_list_item());
        assert_eq!(items.len(), 4);
        assert_eq!(tree.text_content(items[0]), "a");
        for item in &items[1..3] {
            assert_eq!(tree.text_content(*item), ZWSP);
        }
        let last = tree.children(tree.first_child(items[3]).unwrap()).to_vec();
        assert_eq!(
            last.iter().map(|n| tree.kind(*n).name()).collect::<Vec<_>>(),
            vec!["Text", "Caret"]
        );
    }

    #[test]
    fn split_moves_whole_link_holding_the_caret() {
        let mut tree = parsed("- see x\n");
        let para = tree.find_all(|k| matches!(k, NodeKind::Paragraph))[0];
        let link = tree.append_new(
            para,
            NodeKind::Link {
                destination: "https://a.b".into(),
                title: None,
            },
            "link".into(),
        );
        tree.append_new(link, NodeKind::Text("a.b".into()), "lt".into());
        tree.append_new(link, NodeKind::Caret, "caret".into());

        apply_list_command(&mut tree, ListCommand::Split, &mut FixedIdGenerator).unwrap();
        invariants::check(&tree);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List - tight
            ListItem -
              Paragraph
                Text "see x"
            ListItem -
              Paragraph
                Link "https://a.b"
                  Text "a.b"
                  Caret
        "#);
    }

    #[test]
    fn split_renumbers_following_items() {
        let (tree, _) = run("1. a\u{2038}\n2. b\n", ListCommand::Split);
        let markers: Vec<_> = tree
            .find_all(|k| k.is_list_item())
            .into_iter()
            .map(|i| match tree.kind(i) {
                NodeKind::ListItem { marker } => marker.clone(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(markers, vec!["1.", "2.", "3."]);
    }

    #[test]
    fn split_carries_later_blocks_and_keeps_ids() {
        let (tree, _) = run("- a\u{2038}\n\n  b\n", ListCommand::Split);
        insta::assert_snapshot!(outline(&tree), @r#"
        Document
          List - loose
            ListItem -
              Paragraph
                Text "a"
            ListItem -
              Paragraph
                Text "\u{200b}"
                Caret
              Paragraph
                Text "b"
        "#);
        // doc 1, list 2, item 3, para 4, text 5, caret 6, para 7
        let moved = tree.find_by_id(seq(7).as_str()).unwrap();
        assert_eq!(tree.text_content(moved), "b");
    }
}
